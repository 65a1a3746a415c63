use clap::{Args, Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

use toon_kotlin_compiler::{
    check_toon, compile_toon, GenerationConfig, NullableMode, ToonError,
};

#[derive(Parser)]
#[command(name = "toonkt")]
#[command(about = "Compile TOON files to Kotlin data classes", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate Kotlin files from a `.toon` file
    Generate {
        /// Input `.toon` file
        #[arg(short, long)]
        input: PathBuf,

        /// Output directory (defaults to `generated`)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Package for the generated files, e.g. `com.example.models`;
        /// also creates the matching directory structure
        #[arg(short, long)]
        package: Option<String>,

        #[command(flatten)]
        options: ConfigArgs,
    },

    /// Print generated Kotlin to stdout without writing files
    Preview {
        /// Input `.toon` file
        #[arg(short, long)]
        input: PathBuf,

        #[command(flatten)]
        options: ConfigArgs,
    },

    /// Validate and parse a `.toon` file without generating code
    Check {
        /// Input `.toon` file
        #[arg(short, long)]
        input: PathBuf,

        /// Pretty-print the parsed AST as JSON
        #[arg(long)]
        ast: bool,
    },
}

/// Generation options: a JSON config file plus a few common overrides that
/// are applied on top of it.
#[derive(Args)]
struct ConfigArgs {
    /// JSON file holding a full generation configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Annotation framework override (e.g. gson, jackson, kotlinx)
    #[arg(long)]
    framework: Option<String>,

    /// Make all fields nullable
    #[arg(long)]
    nullable: bool,

    /// Emit `var` properties instead of `val`
    #[arg(long)]
    use_var: bool,

    /// Nest generated classes inside their parent class
    #[arg(long)]
    inner_classes: bool,
}

impl ConfigArgs {
    fn resolve(&self) -> Result<GenerationConfig, ToonError> {
        let mut config = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path)?;
                serde_json::from_str(&text)
                    .map_err(|e| ToonError::Config(e.to_string()))?
            }
            None => GenerationConfig::default(),
        };

        if let Some(name) = &self.framework {
            config.framework = name.parse().map_err(ToonError::Config)?;
        }
        if self.nullable {
            config.nullable = NullableMode::Nullable;
        }
        if self.use_var {
            config.use_val = false;
        }
        if self.inner_classes {
            config.inner_classes = true;
        }

        Ok(config)
    }
}

fn main() -> Result<(), ToonError> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Generate { input, output, package, options } => {
            let text = fs::read_to_string(input)?;
            let config = options.resolve()?;
            let units = compile_toon(&text, &config)?;

            let out_dir = output.clone().unwrap_or_else(|| PathBuf::from("generated"));
            let target = package_dir(&out_dir, package.as_deref());
            fs::create_dir_all(&target)?;

            for (name, content) in &units {
                let path = target.join(format!("{}.kt", name));
                fs::write(&path, render_file(content, package.as_deref()))?;
                println!("Wrote {}", path.display());
            }
            println!("Generated {} file(s) at {}", units.len(), target.display());
            Ok(())
        }

        Commands::Preview { input, options } => {
            let text = fs::read_to_string(input)?;
            let config = options.resolve()?;
            let units = compile_toon(&text, &config)?;

            for (index, (name, content)) in units.iter().enumerate() {
                if index > 0 {
                    println!("\n{}\n", "=".repeat(60));
                }
                println!("// FILE: {}.kt\n", name);
                print!("{}", content);
            }
            Ok(())
        }

        Commands::Check { input, ast } => {
            let text = fs::read_to_string(input)?;
            let doc = check_toon(&text)?;

            if *ast {
                let json = serde_json::to_string_pretty(&doc)
                    .map_err(|e| ToonError::Config(e.to_string()))?;
                println!("{}", json);
            } else {
                println!("OK: {} top-level object(s)", doc.len());
            }
            Ok(())
        }
    }
}

/// `com.example.models` → `<root>/com/example/models`
fn package_dir(root: &Path, package: Option<&str>) -> PathBuf {
    match package {
        Some(pkg) if !pkg.is_empty() => {
            let mut dir = root.to_path_buf();
            for part in pkg.split('.') {
                dir.push(part);
            }
            dir
        }
        _ => root.to_path_buf(),
    }
}

/// Prepends the package declaration when one was requested.
fn render_file(content: &str, package: Option<&str>) -> String {
    match package {
        Some(pkg) if !pkg.is_empty() => format!("package {}\n\n{}", pkg, content),
        _ => content.to_string(),
    }
}
