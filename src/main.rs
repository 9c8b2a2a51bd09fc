use clap::{Parser, Subcommand};
use colored::*;
use noticiario::error::{NewsError, Result};
use noticiario::model::{Content, ContentBlock, NewsRecord, RecordInput};
use noticiario::service::NewsService;
use noticiario::store::fs::FileStore;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "noticiario")]
#[command(about = "File-backed news store", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path of the news database (defaults to the XDG data dir)
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List all records, primary first
    #[command(alias = "ls")]
    List,

    /// Print one record as JSON
    Get { id: u64 },

    /// Create a new secondary record
    #[command(alias = "n")]
    Create {
        #[arg(short, long, required = true)]
        titulo: String,

        #[arg(short, long, default_value = "")]
        subtitulo: String,

        #[arg(short, long, default_value = "")]
        imagem: String,

        #[arg(long)]
        time: Option<String>,

        #[arg(long)]
        assunto: Option<String>,

        /// Body paragraph, repeatable
        #[arg(short, long)]
        paragrafo: Vec<String>,
    },

    /// Replace an existing record (the ID stays)
    Update {
        id: u64,

        #[arg(short, long, required = true)]
        titulo: String,

        #[arg(short, long, default_value = "")]
        subtitulo: String,

        #[arg(short, long, default_value = "")]
        imagem: String,

        #[arg(long)]
        time: Option<String>,

        #[arg(long)]
        assunto: Option<String>,

        /// Body paragraph, repeatable
        #[arg(short, long)]
        paragrafo: Vec<String>,
    },

    /// Delete a secondary record (the primary record cannot be deleted)
    #[command(alias = "rm")]
    Delete { id: u64 },
}

fn build_input(
    titulo: String,
    subtitulo: String,
    imagem: String,
    time: Option<String>,
    assunto: Option<String>,
    paragrafo: Vec<String>,
) -> Result<RecordInput> {
    if titulo.trim().is_empty() {
        return Err(NewsError::InvalidInput("titulo cannot be empty".to_string()));
    }
    Ok(RecordInput {
        imagem,
        titulo,
        subtitulo,
        time,
        assunto,
        conteudo: Content::Blocks(paragrafo.into_iter().map(ContentBlock::paragraph).collect()),
    })
}

fn print_records(records: &[NewsRecord], principal_id: Option<u64>) {
    if records.is_empty() {
        println!("No news records.");
        return;
    }
    for record in records {
        let id_str = format!("{:<4}", record.id);
        if principal_id == Some(record.id) {
            println!("{} {} {}", id_str.yellow(), "★".yellow(), record.titulo.bold());
        } else {
            println!("{}   {}", id_str.green(), record.titulo);
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let path = match cli.file {
        Some(path) => path,
        None => FileStore::default_path().ok_or_else(|| {
            NewsError::InvalidInput("could not determine a data dir, pass --file".to_string())
        })?,
    };

    let service = NewsService::open(FileStore::new(path));

    match cli.command {
        Commands::List => {
            // One snapshot for both the listing and the primary marker
            let doc = service.snapshot()?;
            let principal_id = doc.principal.as_ref().map(|record| record.id);
            let records: Vec<NewsRecord> = doc.iter().cloned().collect();
            print_records(&records, principal_id);
        }
        Commands::Get { id } => {
            let record = service.get(id)?;
            println!("{}", serde_json::to_string_pretty(&record).map_err(NewsError::Corrupt)?);
        }
        Commands::Create {
            titulo,
            subtitulo,
            imagem,
            time,
            assunto,
            paragrafo,
        } => {
            let input = build_input(titulo, subtitulo, imagem, time, assunto, paragrafo)?;
            let created = service.create(input)?;
            println!("Created record {}: {}", created.id, created.titulo.green());
        }
        Commands::Update {
            id,
            titulo,
            subtitulo,
            imagem,
            time,
            assunto,
            paragrafo,
        } => {
            let input = build_input(titulo, subtitulo, imagem, time, assunto, paragrafo)?;
            let updated = service.update(id, input)?;
            println!("Updated record {}: {}", updated.id, updated.titulo.green());
        }
        Commands::Delete { id } => {
            service.delete(id)?;
            println!("Deleted record {}", id.to_string().red());
        }
    }

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
