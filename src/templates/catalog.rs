use crate::format::{ConversionError, DecodeError, Format, convert, parse};
use crate::tree::{Directory, MergePolicy};

/// A named project layout shipped with the tool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub content: &'static str,
    pub format: Format,
}

impl Template {
    /// The template content in the requested notation
    pub fn content_as(&self, format: Format) -> Result<String, ConversionError> {
        convert(self.content, self.format, format)
    }

    pub fn tree(&self, policy: MergePolicy) -> Result<Directory, DecodeError> {
        parse(self.content, self.format, policy)
    }
}

const TEMPLATES: &[Template] = &[
    Template {
        id: "react-vite",
        name: "React + Vite",
        description: "A modern frontend template with React and Vite.",
        content: "{\n  \"src\": {\n    \"assets\": [],\n    \"components\": {\n      \"HelloWorld.jsx\": null\n    },\n    \"App.jsx\": null,\n    \"index.css\": null,\n    \"main.jsx\": null\n  },\n  \"public\": {\n    \"vite.svg\": null\n  },\n  \"index.html\": null,\n  \"package.json\": \"{\\n  \\\"name\\\": \\\"react-vite-project\\\",\\n  \\\"private\\\": true,\\n  \\\"version\\\": \\\"0.0.0\\\",\\n  \\\"type\\\": \\\"module\\\",\\n  \\\"scripts\\\": {\\n    \\\"dev\\\": \\\"vite\\\",\\n    \\\"build\\\": \\\"vite build\\\",\\n    \\\"preview\\\": \\\"vite preview\\\"\\n  },\\n  \\\"dependencies\\\": {\\n    \\\"react\\\": \\\"^18.2.0\\\",\\n    \\\"react-dom\\\": \\\"^18.2.0\\\"\\n  },\\n  \\\"devDependencies\\\": {\\n    \\\"@vitejs/plugin-react\\\": \\\"^4.0.0\\\",\\n    \\\"vite\\\": \\\"^4.2.0\\\"\\n  }\\n}\",\n  \"README.md\": \"# React + Vite Project\"\n}",
        format: Format::Json,
    },
    Template {
        id: "express-js",
        name: "Node.js + Express",
        description: "A basic backend structure for an Express.js API.",
        content: "src/\n  controllers/\n    userController.js\n  models/\n    userModel.js\n  routes/\n    userRoutes.js\n  app.js\n  server.js\n.env\n.gitignore\npackage.json\nREADME.md",
        format: Format::Text,
    },
    Template {
        id: "spring-boot",
        name: "Spring Boot API",
        description: "A standard Maven project for a Spring Boot REST API.",
        content: "src/\n  main/\n    java/\n      com/\n        example/\n          demo/\n            controller/\n              ApiController.java\n            model/\n              Item.java\n            repository/\n              ItemRepository.java\n            service/\n              ApiService.java\n            DemoApplication.java\n    resources/\n      application.properties\n  test/\n    java/\n      com/\n        example/\n          demo/\n            DemoApplicationTests.java\npom.xml\nREADME.md",
        format: Format::Text,
    },
    Template {
        id: "django-project",
        name: "Django Project",
        description: "A standard Django project with a single app.",
        content: "myproject/\n  __init__.py\n  asgi.py\n  settings.py\n  urls.py\n  wsgi.py\nmyapp/\n  __init__.py\n  admin.py\n  apps.py\n  migrations/\n    __init__.py\n  models.py\n  tests.py\n  views.py\n  urls.py\nmanage.py\nrequirements.txt\nREADME.md",
        format: Format::Text,
    },
    Template {
        id: "react-vite-ts",
        name: "React + Vite + TypeScript",
        description: "A modern frontend template with React, Vite, and TypeScript.",
        content: "{\n  \"src\": {\n    \"assets\": [],\n    \"components\": {\n      \"HelloWorld.tsx\": null\n    },\n    \"App.tsx\": null,\n    \"index.css\": null,\n    \"main.tsx\": null,\n    \"vite-env.d.ts\": null\n  },\n  \"public\": {\n    \"vite.svg\": null\n  },\n  \"index.html\": null,\n  \"package.json\": \"{\\n  \\\"name\\\": \\\"react-vite-ts-project\\\",\\n  \\\"private\\\": true,\\n  \\\"version\\\": \\\"0.0.0\\\",\\n  \\\"type\\\": \\\"module\\\",\\n  \\\"scripts\\\": {\\n    \\\"dev\\\": \\\"vite\\\",\\n    \\\"build\\\": \\\"tsc && vite build\\\",\\n    \\\"preview\\\": \\\"vite preview\\\"\\n  },\\n  \\\"dependencies\\\": {\\n    \\\"react\\\": \\\"^18.2.0\\\",\\n    \\\"react-dom\\\": \\\"^18.2.0\\\"\\n  },\\n  \\\"devDependencies\\\": {\\n    \\\"@types/react\\\": \\\"^18.2.15\\\",\\n    \\\"@types/react-dom\\\": \\\"^18.2.7\\\",\\n    \\\"@vitejs/plugin-react\\\": \\\"^4.0.3\\\",\\n    \\\"typescript\\\": \\\"^5.0.2\\\",\\n    \\\"vite\\\": \\\"^4.4.5\\\"\\n  }\\n}\",\n  \"tsconfig.json\": \"{\\n  \\\"compilerOptions\\\": {\\n    \\\"target\\\": \\\"ES2020\\\",\\n    \\\"useDefineForClassFields\\\": true,\\n    \\\"lib\\\": [\\\"ES2020\\\", \\\"DOM\\\", \\\"DOM.Iterable\\\"],\\n    \\\"module\\\": \\\"ESNext\\\",\\n    \\\"skipLibCheck\\\": true,\\n    \\\"moduleResolution\\\": \\\"bundler\\\",\\n    \\\"allowImportingTsExtensions\\\": true,\\n    \\\"resolveJsonModule\\\": true,\\n    \\\"isolatedModules\\\": true,\\n    \\\"noEmit\\\": true,\\n    \\\"jsx\\\": \\\"react-jsx\\\",\\n    \\\"strict\\\": true,\\n    \\\"noUnusedLocals\\\": true,\\n    \\\"noUnusedParameters\\\": true,\\n    \\\"noFallthroughCasesInSwitch\\\": true\\n  },\\n  \\\"include\\\": [\\\"src\\\"],\\n  \\\"references\\\": [{\\n    \\\"path\\\": \\\"./tsconfig.node.json\\\"\\n  }]\\n}\",\n  \"tsconfig.node.json\": \"{\\n  \\\"compilerOptions\\\": {\\n    \\\"composite\\\": true,\\n    \\\"skipLibCheck\\\": true,\\n    \\\"module\\\": \\\"ESNext\\\",\\n    \\\"moduleResolution\\\": \\\"bundler\\\",\\n    \\\"allowSyntheticDefaultImports\\\": true\\n  },\\n  \\\"include\\\": [\\\"vite.config.ts\\\"]\\n}\",\n  \"vite.config.ts\": null,\n  \"README.md\": \"# React + Vite + TypeScript Project\"\n}",
        format: Format::Json,
    },
    Template {
        id: "vue-vite",
        name: "Vue + Vite",
        description: "A lightweight and fast Vue.js project setup with Vite.",
        content: "src/\n  assets/\n    vue.svg\n  components/\n    HelloWorld.vue\n  App.vue\n  main.js\n  style.css\npublic/\n  vite.svg\nindex.html\npackage.json\nREADME.md",
        format: Format::Text,
    },
    Template {
        id: "angular-cli",
        name: "Angular CLI Project",
        description: "A standard Angular project generated with Angular CLI.",
        content: "{\n  \"src\": {\n    \"app\": {\n      \"app.component.css\": null,\n      \"app.component.html\": null,\n      \"app.component.spec.ts\": null,\n      \"app.component.ts\": null,\n      \"app.module.ts\": null\n    },\n    \"assets\": [],\n    \"environments\": {\n      \"environment.prod.ts\": null,\n      \"environment.ts\": null\n    },\n    \"favicon.ico\": null,\n    \"index.html\": null,\n    \"main.ts\": null,\n    \"polyfills.ts\": null,\n    \"styles.css\": null,\n    \"test.ts\": null\n  },\n  \".editorconfig\": null,\n  \".gitignore\": null,\n  \"angular.json\": \"{... angular config ...}\",\n  \"package.json\": \"{... angular dependencies ...}\",\n  \"tsconfig.app.json\": null,\n  \"tsconfig.json\": null,\n  \"tsconfig.spec.json\": null,\n  \"README.md\": \"# Angular Project\"\n}",
        format: Format::Json,
    },
    Template {
        id: "nextjs-app",
        name: "Next.js App Router",
        description: "A modern Next.js project using the App Router.",
        content: "app/\n  favicon.ico\n  globals.css\n  layout.tsx\n  page.tsx\npublic/\n  next.svg\n  vercel.svg\n.gitignore\nnext.config.js\npackage.json\nREADME.md\ntsconfig.json",
        format: Format::Text,
    },
    Template {
        id: "svelte-kit",
        name: "SvelteKit Project",
        description: "A full-stack Svelte application using SvelteKit.",
        content: "src/\n  lib/\n    index.js\n  routes/\n    +page.svelte\n    +layout.svelte\napp.html\npackage.json\nsvelte.config.js\nvite.config.js\nREADME.md",
        format: Format::Text,
    },
    Template {
        id: "html5-boilerplate",
        name: "HTML5 Boilerplate",
        description: "A professional front-end template for a fast, robust, and adaptable web app.",
        content: "css/\n  main.css\n  normalize.css\ndoc/\njs/\n  main.js\n  vendor/\n    modernizr-3.11.2.min.js\n.gitignore\n404.html\nindex.html\nicon.png\nsite.webmanifest\nrobots.txt",
        format: Format::Text,
    },
    Template {
        id: "astro-build",
        name: "Astro Project",
        description: "A basic Astro project for content-driven websites.",
        content: "src/\n  components/\n    Card.astro\n  layouts/\n    Layout.astro\n  pages/\n    index.astro\n  styles/\n    global.css\npublic/\n  favicon.svg\nastro.config.mjs\npackage.json\nREADME.md\ntsconfig.json",
        format: Format::Text,
    },
    Template {
        id: "gatsby-starter",
        name: "Gatsby Starter",
        description: "A starter template for building static sites with Gatsby.",
        content: "src/\n  components/\n    layout.js\n    seo.js\n  images/\n    gatsby-icon.png\n  pages/\n    404.js\n    index.js\n.gitignore\ngatsby-config.js\npackage.json\nREADME.md",
        format: Format::Text,
    },
    Template {
        id: "nestjs-api",
        name: "NestJS API",
        description: "A progressive Node.js framework for building efficient and scalable server-side applications.",
        content: "{\n  \"src\": {\n    \"app.controller.spec.ts\": null,\n    \"app.controller.ts\": null,\n    \"app.module.ts\": null,\n    \"app.service.ts\": null,\n    \"main.ts\": null\n  },\n  \"test\": {\n    \"app.e2e-spec.ts\": null,\n    \"jest-e2e.json\": null\n  },\n  \".eslintrc.js\": null,\n  \".gitignore\": null,\n  \".prettierrc\": null,\n  \"nest-cli.json\": null,\n  \"package.json\": \"{\\\"name\\\": \\\"nest-api\\\", ...}\",\n  \"tsconfig.build.json\": null,\n  \"tsconfig.json\": null,\n  \"README.md\": \"# NestJS API\"\n}",
        format: Format::Json,
    },
    Template {
        id: "flask-api",
        name: "Python Flask API",
        description: "A minimal Flask application for building a REST API.",
        content: "app/\n  __init__.py\n  routes.py\n  models.py\ninstance/\n  config.py\n.flaskenv\nconfig.py\nrequirements.txt\nrun.py\nREADME.md",
        format: Format::Text,
    },
    Template {
        id: "fastapi-app",
        name: "Python FastAPI App",
        description: "A modern, fast (high-performance) web framework for building APIs with Python 3.7+.",
        content: "app/\n  __init__.py\n  main.py\n  dependencies.py\n  routers/\n    items.py\n    users.py\n  internal/\n    admin.py\n.gitignore\nrequirements.txt\nREADME.md",
        format: Format::Text,
    },
    Template {
        id: "ruby-on-rails",
        name: "Ruby on Rails API",
        description: "A standard Ruby on Rails project for building a backend API.",
        content: "app/\n  controllers/\n    api/\n      v1/\n        items_controller.rb\n  models/\n    item.rb\nconfig/\n  routes.rb\ndb/\n  migrate/\n    create_items.rb\nGemfile\nRakefile\nREADME.md",
        format: Format::Text,
    },
    Template {
        id: "laravel-api",
        name: "PHP Laravel API",
        description: "A standard Laravel project structure for a RESTful API.",
        content: "app/\n  Http/\n    Controllers/\n      Api/\n        PostController.php\n  Models/\n    Post.php\nroutes/\n  api.php\n.env.example\nartisan\ncomposer.json\nREADME.md",
        format: Format::Text,
    },
    Template {
        id: "go-gin-api",
        name: "Go Gin API",
        description: "A REST API project using the Gin framework in Go.",
        content: "cmd/\n  api/\n    main.go\ninternal/\n  handlers/\n    item_handler.go\n  models/\n    item.go\n  routes/\n    routes.go\n.gitignore\ngo.mod\nREADME.md",
        format: Format::Text,
    },
    Template {
        id: "rust-actix-web",
        name: "Rust Actix-Web API",
        description: "A simple REST API built with Rust and the Actix-Web framework.",
        content: "src/\n  main.rs\n  handlers.rs\n  models.rs\n.gitignore\nCargo.toml\nREADME.md",
        format: Format::Text,
    },
    Template {
        id: "ktor-api",
        name: "Kotlin Ktor API",
        description: "A web application framework for Kotlin. Asynchronous and lightweight.",
        content: "src/\n  main/\n    kotlin/\n      com/example/\n        Application.kt\n        plugins/\n          Routing.kt\n          Serialization.kt\n    resources/\n      application.conf\n      logback.xml\n.gitignore\nbuild.gradle.kts\ngradlew\nREADME.md",
        format: Format::Text,
    },
    Template {
        id: "quarkus-api",
        name: "Java Quarkus API",
        description: "A Supersonic Subatomic Java Framework for building fast-launching, low-memory applications.",
        content: "src/\n  main/\n    java/\n      org/acme/\n        GreetingResource.java\n    resources/\n      application.properties\n.gitignore\nmvnw\npom.xml\nREADME.md",
        format: Format::Text,
    },
    Template {
        id: "mern-stack",
        name: "MERN Stack",
        description: "A full-stack application with MongoDB, Express, React, and Node.js.",
        content: "{\n  \"client\": {\n    \"public\": {\n      \"index.html\": null\n    },\n    \"src\": {\n      \"App.js\": null,\n      \"index.js\": null\n    },\n    \"package.json\": \"{\\\"name\\\": \\\"client\\\", ...}\"\n  },\n  \"server\": {\n    \"controllers\": {\n      \"itemController.js\": null\n    },\n    \"models\": {\n      \"Item.js\": null\n    },\n    \"routes\": {\n      \"api.js\": null\n    },\n    \"config.js\": null,\n    \"package.json\": \"{\\\"name\\\": \\\"server\\\", ...}\",\n    \"server.js\": null\n  },\n  \".gitignore\": null,\n  \"README.md\": \"# MERN Stack Project\"\n}",
        format: Format::Json,
    },
    Template {
        id: "mean-stack",
        name: "MEAN Stack",
        description: "A full-stack application with MongoDB, Express, Angular, and Node.js.",
        content: "client/\n  src/\n    app/\n      app.module.ts\n    main.ts\n  angular.json\nserver/\n  models/\n    user.model.js\n  routes/\n    user.route.js\n  server.js\npackage.json\nREADME.md",
        format: Format::Text,
    },
    Template {
        id: "mevn-stack",
        name: "MEVN Stack",
        description: "A full-stack application with MongoDB, Express, Vue, and Node.js.",
        content: "client/\n  src/\n    components/\n      HelloWorld.vue\n    App.vue\n  vite.config.js\nserver/\n  controllers/\n    post.controller.js\n  models/\n    post.model.js\n  server.js\npackage.json\nREADME.md",
        format: Format::Text,
    },
    Template {
        id: "django-react",
        name: "Django + React",
        description: "A project with Django serving a REST API and a React frontend.",
        content: "backend/\n  api/\n    serializers.py\n    views.py\n  project/\n    settings.py\n  manage.py\nfrontend/\n  src/\n    components/\n    App.js\n  package.json\nREADME.md",
        format: Format::Text,
    },
    Template {
        id: "react-native-cli",
        name: "React Native CLI",
        description: "A basic React Native project structure.",
        content: "android/\nios/\nsrc/\n  components/\n  screens/\n  navigation/\n  App.js\n.gitignore\npackage.json\nREADME.md",
        format: Format::Text,
    },
    Template {
        id: "flutter-app",
        name: "Flutter Application",
        description: "A standard Flutter application structure.",
        content: "android/\nios/\nlib/\n  main.dart\n  screens/\n  widgets/\n  models/\ntest/\n.gitignore\npubspec.yaml\nREADME.md",
        format: Format::Text,
    },
    Template {
        id: "swift-ios-app",
        name: "Swift iOS App",
        description: "A basic iOS application structure using Swift and UIKit.",
        content: "AppName/\n  AppDelegate.swift\n  SceneDelegate.swift\n  ViewController.swift\n  Base.lproj/\n    LaunchScreen.storyboard\n    Main.storyboard\n  Assets.xcassets/\nInfo.plist",
        format: Format::Text,
    },
    Template {
        id: "kotlin-android-app",
        name: "Kotlin Android App",
        description: "A basic Android application structure using Kotlin and XML.",
        content: "app/\n  src/\n    main/\n      java/com/example/app/\n        MainActivity.kt\n      res/\n        drawable/\n        layout/\n          activity_main.xml\n        values/\n          colors.xml\n          strings.xml\n          themes.xml\n      AndroidManifest.xml\n  build.gradle\n.gitignore",
        format: Format::Text,
    },
    Template {
        id: "electron-app",
        name: "Electron App",
        description: "A cross-platform desktop application using Electron, HTML, CSS, and JS.",
        content: "{\n  \"src\": {\n    \"main.js\": \"// Main process\",\n    \"preload.js\": \"// Preload script\",\n    \"renderer.js\": \"// Renderer process\"\n  },\n  \"index.html\": null,\n  \"package.json\": \"{\\n  \\\"name\\\": \\\"electron-app\\\",\\n  \\\"version\\\": \\\"1.0.0\\\",\\n  \\\"main\\\": \\\"src/main.js\\\",\\n  \\\"scripts\\\": {\\n    \\\"start\\\": \\\"electron .\\\"\\n  },\\n  \\\"devDependencies\\\": {\\n    \\\"electron\\\": \\\"^25.0.0\\\"\\n  }\\n}\",\n  \"README.md\": \"# Electron App\"\n}",
        format: Format::Json,
    },
    Template {
        id: "tauri-app",
        name: "Tauri App",
        description: "A secure, fast, and small desktop application with a Rust backend and web frontend.",
        content: "src-tauri/\n  src/\n    main.rs\n  tauri.conf.json\n  build.rs\nsrc/\n  main.jsx\n  style.css\n.gitignore\nindex.html\npackage.json",
        format: Format::Text,
    },
    Template {
        id: "python-datascience",
        name: "Python Data Science Project",
        description: "A standard structure for a data science project in Python.",
        content: "data/\n  raw/\n  processed/\nnotebooks/\n  1.0-data-exploration.ipynb\n  2.0-feature-engineering.ipynb\n  3.0-model-training.ipynb\nsrc/\n  __init__.py\n  data/\n    make_dataset.py\n  features/\n    build_features.py\n  models/\n    predict_model.py\n    train_model.py\n  visualization/\n    visualize.py\n.gitignore\nrequirements.txt\nREADME.md",
        format: Format::Text,
    },
    Template {
        id: "pytorch-project",
        name: "PyTorch Project",
        description: "A basic structure for a deep learning project using PyTorch.",
        content: "data/\nmodels/\n  model.py\nsrc/\n  dataset.py\n  engine.py\n  train.py\nconfig.py\nrequirements.txt\nREADME.md",
        format: Format::Text,
    },
    Template {
        id: "tensorflow-project",
        name: "TensorFlow Project",
        description: "A basic structure for a deep learning project using TensorFlow/Keras.",
        content: "data/\nnotebooks/\n  eda.ipynb\nsrc/\n  data_loader.py\n  model_builder.py\n  train.py\n  evaluate.py\nrequirements.txt\nREADME.md",
        format: Format::Text,
    },
    Template {
        id: "docker-compose-app",
        name: "Docker Compose App",
        description: "A multi-container application defined with Docker Compose.",
        content: "{\n  \"backend\": {\n    \"Dockerfile\": null,\n    \"app.py\": null,\n    \"requirements.txt\": null\n  },\n  \"frontend\": {\n    \"Dockerfile\": null,\n    \"src\": [],\n    \"package.json\": null\n  },\n  \"docker-compose.yml\": \"version: '3.8'\\nservices:\\n  backend:\\n    build: ./backend\\n    ports:\\n      - \\\"5000:5000\\\"\\n  frontend:\\n    build: ./frontend\\n    ports:\\n      - \\\"3000:3000\\\"\\n\",\n  \"README.md\": \"# Docker Compose App\"\n}",
        format: Format::Json,
    },
    Template {
        id: "terraform-aws",
        name: "Terraform AWS S3",
        description: "A basic Terraform configuration to provision an S3 bucket on AWS.",
        content: "modules/\n  s3-bucket/\n    main.tf\n    variables.tf\n    outputs.tf\n.gitignore\nmain.tf\nproviders.tf\nterraform.tfvars\nvariables.tf\nREADME.md",
        format: Format::Text,
    },
    Template {
        id: "kubernetes-manifests",
        name: "Kubernetes Manifests",
        description: "A set of Kubernetes YAML manifests for deploying an application.",
        content: "base/\n  deployment.yaml\n  service.yaml\n  configmap.yaml\n  kustomization.yaml\noverlays/\n  production/\n    kustomization.yaml\n    patch.yaml\n  staging/\n    kustomization.yaml\n    patch.yaml\nREADME.md",
        format: Format::Text,
    },
    Template {
        id: "ansible-playbook",
        name: "Ansible Playbook",
        description: "A basic Ansible structure for server configuration.",
        content: "group_vars/\n  all.yml\nhost_vars/\n  server1.yml\nroles/\n  common/\n    tasks/\n      main.yml\n  webserver/\n    tasks/\n      main.yml\n    templates/\n      httpd.conf.j2\n.gitignore\ninventory\nplaybook.yml\nansible.cfg\nREADME.md",
        format: Format::Text,
    },
    Template {
        id: "github-action-ci",
        name: "GitHub Action CI",
        description: "A basic CI pipeline for a Node.js project using GitHub Actions.",
        content: ".github/\n  workflows/\n    ci.yml\nsrc/\n  index.js\n  index.test.js\n.gitignore\npackage.json\nREADME.md",
        format: Format::Text,
    },
    Template {
        id: "npm-package",
        name: "NPM Package",
        description: "A boilerplate for creating a new NPM package with TypeScript.",
        content: "{\n  \"dist\": [],\n  \"src\": {\n    \"index.ts\": null\n  },\n  \".gitignore\": null,\n  \"package.json\": \"{\\n  \\\"name\\\": \\\"my-awesome-package\\\",\\n  \\\"version\\\": \\\"1.0.0\\\",\\n  \\\"main\\\": \\\"dist/index.js\\\",\\n  \\\"types\\\": \\\"dist/index.d.ts\\\",\\n  \\\"scripts\\\": {\\n    \\\"build\\\": \\\"tsc\\\"\\n  },\\n  \\\"devDependencies\\\": {\\n    \\\"typescript\\\": \\\"^5.0.0\\\"\\n  }\\n}\",\n  \"tsconfig.json\": null,\n  \"README.md\": \"# My Awesome Package\"\n}",
        format: Format::Json,
    },
    Template {
        id: "python-package-pyproject",
        name: "Python Package (pyproject.toml)",
        description: "A modern Python package structure using pyproject.toml and setuptools.",
        content: "src/\n  my_package/\n    __init__.py\n    module.py\ntests/\n  test_module.py\n.gitignore\npyproject.toml\nREADME.md",
        format: Format::Text,
    },
    Template {
        id: "rust-library",
        name: "Rust Library",
        description: "A standard Rust library (crate) structure.",
        content: "src/\n  lib.rs\n  main.rs  # for examples\n.gitignore\nCargo.toml\nREADME.md",
        format: Format::Text,
    },
    Template {
        id: "go-module",
        name: "Go Module/Library",
        description: "A basic structure for a reusable Go module.",
        content: "utils/\n  strings.go\n  strings_test.go\n.gitignore\ngo.mod\nLICENSE\nREADME.md",
        format: Format::Text,
    },
    Template {
        id: "chrome-extension",
        name: "Chrome Extension",
        description: "A minimal boilerplate for a browser extension for Google Chrome.",
        content: "{\n  \"icons\": {\n    \"icon16.png\": null,\n    \"icon48.png\": null,\n    \"icon128.png\": null\n  },\n  \"background.js\": null,\n  \"content.js\": null,\n  \"manifest.json\": \"{\\n  \\\"manifest_version\\\": 3,\\n  \\\"name\\\": \\\"My Extension\\\",\\n  \\\"version\\\": \\\"1.0\\\",\\n  \\\"description\\\": \\\"A simple Chrome extension.\\\",\\n  \\\"permissions\\\": [\\\"storage\\\"],\\n  \\\"action\\\": {\\n    \\\"default_popup\\\": \\\"popup.html\\\"\\n  }\\n}\",\n  \"popup.html\": null,\n  \"popup.js\": null,\n  \"README.md\": \"# Chrome Extension\"\n}",
        format: Format::Json,
    },
    Template {
        id: "vscode-extension",
        name: "VS Code Extension",
        description: "A template for building a Visual Studio Code extension with TypeScript.",
        content: "src/\n  test/\n    runTest.ts\n    suite/\n      extension.test.ts\n      index.ts\n  extension.ts\n.vscodeignore\n.gitignore\npackage.json\ntsconfig.json\nREADME.md",
        format: Format::Text,
    },
    Template {
        id: "discord-bot-js",
        name: "Discord.js Bot",
        description: "A basic Discord bot using the Discord.js library for Node.js.",
        content: "commands/\n  utility/\n    ping.js\nevents/\n  interactionCreate.js\n  ready.js\n.env\n.gitignore\nconfig.json\ndeploy-commands.js\nindex.js\npackage.json\nREADME.md",
        format: Format::Text,
    },
    Template {
        id: "discord-bot-py",
        name: "Discord.py Bot",
        description: "A basic Discord bot using the discord.py library for Python.",
        content: "cogs/\n  greetings.py\nbot.py\nconfig.py\nrequirements.txt\nREADME.md",
        format: Format::Text,
    },
    Template {
        id: "telegram-bot-py",
        name: "Python Telegram Bot",
        description: "A template for a bot on the Telegram platform using python-telegram-bot.",
        content: "bot.py\nconfig.ini\nrequirements.txt\nREADME.md",
        format: Format::Text,
    },
    Template {
        id: "graphql-yoga",
        name: "GraphQL Yoga Server",
        description: "A simple, spec-compliant GraphQL server using GraphQL Yoga.",
        content: "src/\n  schema.ts\n  index.ts\n.gitignore\npackage.json\ntsconfig.json\nREADME.md",
        format: Format::Text,
    },
    Template {
        id: "docusaurus-site",
        name: "Docusaurus Site",
        description: "A project for building optimized websites quickly, especially documentation sites.",
        content: "blog/\n  2024-01-01-welcome.md\ndocs/\n  intro.md\nsrc/\n  css/\n    custom.css\n  pages/\n    index.js\nstatic/\n  img/\n    logo.svg\ndocusaurus.config.js\npackage.json\nsidebars.js\nREADME.md",
        format: Format::Text,
    },
    Template {
        id: "godot-project",
        name: "Godot Project",
        description: "A basic folder structure for a game project in the Godot Engine.",
        content: "assets/\n  fonts/\n  music/\n  sprites/\nscenes/\n  main_menu.tscn\n  player.tscn\nscripts/\n  player.gd\n.gitignore\nicon.svg\nproject.godot\nREADME.md",
        format: Format::Text,
    },
    Template {
        id: "unity-project",
        name: "Unity Project",
        description: "A standard folder structure for a game project in the Unity Engine.",
        content: "Assets/\n  _Scenes/\n  _Scripts/\n  _Prefabs/\n  _Materials/\n  _Textures/\n  _Audio/\nProjectSettings/\nPackages/\n.gitignore\nREADME.md",
        format: Format::Text,
    },
    Template {
        id: "bevy-game",
        name: "Bevy Game (Rust)",
        description: "A simple game project structure using the Bevy engine for Rust.",
        content: "assets/\n  sprites/\n  audio/\nsrc/\n  main.rs\n  player.rs\n  camera.rs\n.gitignore\nCargo.toml\nREADME.md",
        format: Format::Text,
    },
    Template {
        id: "markdown-book",
        name: "Markdown Book (mdBook)",
        description: "A project for creating a book from Markdown files.",
        content: "book.toml\nsrc/\n  SUMMARY.md\n  chapter_1.md\n  chapter_2.md\nREADME.md",
        format: Format::Text,
    },
    Template {
        id: "jekyll-site",
        name: "Jekyll Site",
        description: "A static site generated with Jekyll, perfect for blogs and portfolios.",
        content: "_config.yml\n_includes/\n_layouts/\n  default.html\n  post.html\n_posts/\n  2024-01-01-welcome-to-jekyll.markdown\n_sass/\nassets/\n.gitignore\nabout.md\nindex.md\nGemfile",
        format: Format::Text,
    },
    Template {
        id: "phoenix-framework",
        name: "Elixir Phoenix Framework",
        description: "A productive web framework that does not compromise speed and maintainability.",
        content: "lib/\n  my_app/\n  my_app_web/\n    controllers/\n    templates/\n    views/\n    router.ex\n  my_app.ex\n  my_app_web.ex\nassets/\n  css/\n  js/\n.gitignore\nmix.exs\nREADME.md",
        format: Format::Text,
    },
    Template {
        id: "deno-api",
        name: "Deno Oak API",
        description: "A REST API built with Deno and the Oak middleware framework.",
        content: "deps.ts\ndev_deps.ts\nmod.ts\nrouter.ts\ncontrollers/\n  userController.ts\n.gitignore\nREADME.md",
        format: Format::Text,
    },
];

pub fn templates() -> &'static [Template] {
    TEMPLATES
}

pub fn find_template(id: &str) -> Option<&'static Template> {
    TEMPLATES.iter().find(|template| template.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{File, Node};
    use rstest::*;
    use std::collections::HashSet;

    #[test]
    fn template_ids_are_unique() {
        let ids: HashSet<_> = templates().iter().map(|template| template.id).collect();
        assert_eq!(ids.len(), templates().len());
    }

    #[test]
    fn every_template_parses_strictly_in_its_own_format() {
        for template in templates() {
            let tree = template.tree(MergePolicy::Strict);
            assert!(tree.is_ok(), "Template '{}' failed: {:?}", template.id, tree);
            assert!(!tree.unwrap().is_empty());
        }
    }

    #[rstest]
    #[case(Format::Text)]
    #[case(Format::Json)]
    fn every_template_converts_to_both_formats(#[case] format: Format) {
        for template in templates() {
            let converted = template.content_as(format);
            assert!(
                converted.is_ok(),
                "Template '{}' failed: {:?}",
                template.id,
                converted
            );
        }
    }

    #[test]
    fn find_template_by_id() {
        let template = find_template("express-js").unwrap();
        assert_eq!(template.format, Format::Text);
        assert!(find_template("does-not-exist").is_none());
    }

    #[test]
    fn json_templates_keep_file_contents() {
        let tree = find_template("react-vite")
            .unwrap()
            .tree(MergePolicy::Strict)
            .unwrap();

        let Some(Node::File(package)) = tree.get("package.json") else {
            panic!("Expected package.json file");
        };
        let package = package.content().unwrap();
        assert!(package.contains("\"react-dom\": \"^18.2.0\""));
        assert!(package.ends_with('}'));
        assert_eq!(
            tree.get("README.md"),
            Some(&Node::File(File::with_content("README.md", "# React + Vite Project")))
        );
    }

    #[rstest]
    #[case("react-vite-ts", Format::Json)]
    #[case("angular-cli", Format::Json)]
    #[case("mern-stack", Format::Json)]
    #[case("terraform-aws", Format::Text)]
    #[case("discord-bot-py", Format::Text)]
    #[case("deno-api", Format::Text)]
    fn catalog_covers_every_stack(#[case] id: &str, #[case] format: Format) {
        let template = find_template(id).unwrap();
        assert_eq!(template.format, format);
    }
}
