/// Stub content for a new file, chosen by its extension.
///
/// Returns `None` for extensions without a stub and for dotfiles such as
/// `.gitignore`, which have no extension.
pub fn default_content(file_name: &str) -> Option<String> {
    let (stem, extension) = split_extension(file_name)?;

    let content = match extension.to_lowercase().as_str() {
        "java" => format!(
            "public class {} {{\n    // TODO: Implement\n}}\n",
            capitalize(stem)
        ),
        "js" => format!("// {file_name}\nconsole.log('Hello from {file_name}');\n"),
        "py" => format!("# {file_name}\nprint('Hello from {file_name}')\n"),
        "html" => format!(
            "<!DOCTYPE html>\n<html>\n<head>\n    <title>{file_name}</title>\n</head>\n<body>\n    <h1>Hello World</h1>\n</body>\n</html>\n"
        ),
        "css" => format!("/* {file_name} */\nbody {{\n    font-family: Arial, sans-serif;\n}}\n"),
        "md" => format!("# {stem}\n\nThis is a markdown file.\n"),
        "txt" => format!("This is a text file: {file_name}\n"),
        "json" => format!(
            "{{\n    \"name\": \"{file_name}\",\n    \"description\": \"Generated JSON file\"\n}}\n"
        ),
        "xml" => format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<root>\n    <message>Hello from {file_name}</message>\n</root>\n"
        ),
        _ => return None,
    };

    Some(content)
}

fn split_extension(file_name: &str) -> Option<(&str, &str)> {
    match file_name.rfind('.') {
        Some(0) | None => None,
        Some(dot) => Some((&file_name[..dot], &file_name[dot + 1..])),
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[test]
    fn java_files_get_a_class_named_after_the_file() {
        assert_eq!(
            default_content("userService.java").unwrap(),
            "public class UserService {\n    // TODO: Implement\n}\n"
        );
    }

    #[test]
    fn markdown_heading_drops_the_extension() {
        assert_eq!(
            default_content("README.md").unwrap(),
            "# README\n\nThis is a markdown file.\n"
        );
    }

    #[rstest]
    #[case("app.js", "console.log('Hello from app.js');")]
    #[case("main.py", "print('Hello from main.py')")]
    #[case("index.HTML", "<title>index.HTML</title>")]
    #[case("style.css", "/* style.css */")]
    #[case("notes.txt", "This is a text file: notes.txt")]
    #[case("package.json", "\"name\": \"package.json\"")]
    #[case("pom.xml", "Hello from pom.xml")]
    fn known_extensions_get_a_stub(#[case] file_name: &str, #[case] expected: &str) {
        let content = default_content(file_name).unwrap();
        assert!(content.contains(expected), "{content}");
    }

    #[rstest]
    #[case(".gitignore")]
    #[case(".env")]
    #[case("Makefile")]
    #[case("main.rs")]
    #[case("archive.tar.gz")]
    fn other_files_get_nothing(#[case] file_name: &str) {
        assert_eq!(default_content(file_name), None);
    }
}
