use async_trait::async_trait;
use clap::{Parser, Subcommand};
use formwright::prelude::*;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Writes each save request as pretty JSON to a single file.
struct JsonFilePersistence {
    path: PathBuf,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StoredForm<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    form_id: Option<&'a str>,
    revision: u64,
    #[serde(flatten)]
    payload: &'a FormPayload,
}

#[async_trait]
impl FormPersistence for JsonFilePersistence {
    async fn save(&self, request: SaveRequest) -> std::result::Result<(), BoxError> {
        let stored = StoredForm {
            form_id: request.form_id.as_deref(),
            revision: request.revision,
            payload: &request.payload,
        };
        let json = serde_json::to_string_pretty(&stored)?;
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }
}

/// Inspect, validate and save form schemas
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the built-in form templates
    Templates,
    /// Run the save gate on a form without persisting it
    Check {
        /// Path to the form JSON file
        form_path: PathBuf,
        /// Optional path to a knowledge-base directory JSON file
        #[arg(long)]
        kb: Option<PathBuf>,
    },
    /// Validate a form and write the normalized payload to a file
    Submit {
        /// Path to the form JSON file
        form_path: PathBuf,
        /// Where to write the saved payload
        #[arg(short, long)]
        out: PathBuf,
        /// Optional path to a knowledge-base directory JSON file
        #[arg(long)]
        kb: Option<PathBuf>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Templates => list_templates(),
        Command::Check { form_path, kb } => check(&form_path, kb.as_deref()),
        Command::Submit { form_path, out, kb } => submit(&form_path, out, kb.as_deref()).await,
    }
}

fn list_templates() {
    for template in builtin_templates() {
        println!("{:<10} {} ({} fields)", template.key, template.name, template.fields.len());
        println!("           {}", template.description);
    }
}

fn check(form_path: &std::path::Path, kb_path: Option<&std::path::Path>) {
    let form = load_form(form_path);
    let directory = load_directory(kb_path);

    println!("Form:        {}", form.name);
    println!("Fields:      {}", form.fields.len());
    println!("Chat fields: {}", if has_chat_field(&form.fields) { "yes" } else { "no" });
    if let Some(kb) = form.knowledge_base() {
        let name = directory.find(kb).map_or("<not in directory>", |k| k.name.as_str());
        println!("Knowledge base: {} ({})", kb, name);
    }

    match validate(&form) {
        Ok(payload) => {
            let json = serde_json::to_string_pretty(&payload)
                .unwrap_or_else(|e| exit_with_error(&format!("Failed to encode payload: {}", e)));
            println!("\nGate passed. Payload:\n{}", json);
        }
        Err(e) => exit_with_error(&format!("Gate rejected the form: {}", e)),
    }
}

async fn submit(form_path: &std::path::Path, out: PathBuf, kb_path: Option<&std::path::Path>) {
    let form = load_form(form_path);
    let directory = load_directory(kb_path);

    let mut session = EditorSession::new(FormEditor::new(), TracingSink);
    session
        .load_form(form.clone())
        .unwrap_or_else(|e| exit_with_error(&format!("Invalid form: {}", e)));

    let meta = FormMeta {
        name: form.name,
        description: form.description,
        is_public: form.is_public,
        knowledge_base_id: form.knowledge_base_id,
    };
    let persistence = JsonFilePersistence { path: out.clone() };
    match session.submit(meta, &directory, &persistence).await {
        Ok(receipt) => println!(
            "Saved \"{}\" (revision {}) to '{}'",
            receipt.payload.name,
            receipt.revision,
            out.display()
        ),
        Err(e) => exit_with_error(&format!("Submit failed: {}", e)),
    }
}

fn load_form(path: &std::path::Path) -> Form {
    let json = fs::read_to_string(path).unwrap_or_else(|e| {
        exit_with_error(&format!("Failed to read form file '{}': {}", path.display(), e))
    });
    serde_json::from_str(&json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse form JSON: {}", e)))
}

fn load_directory(path: Option<&std::path::Path>) -> KnowledgeBaseDirectory {
    let Some(path) = path else {
        return KnowledgeBaseDirectory::default();
    };
    let json = fs::read_to_string(path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read knowledge base file '{}': {}",
            path.display(),
            e
        ))
    });
    let entries: Vec<KnowledgeBase> = serde_json::from_str(&json).unwrap_or_else(|e| {
        exit_with_error(&format!("Failed to parse knowledge base JSON: {}", e))
    });
    KnowledgeBaseDirectory::loaded(entries)
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("Error: {}", message);
    std::process::exit(1);
}
