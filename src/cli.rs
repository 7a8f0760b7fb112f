// src/cli.rs
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::api::InterviewGuideClient;
use crate::config::ClientConfig;
use crate::types::{CreateInterviewRequest, QueryRequest, SubmitAnswerRequest};
use crate::utils;

#[derive(Parser)]
#[command(name = "interview-guide")]
#[command(about = "Resume analysis and mock interview client")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Backend base URL, overrides config.yaml and INTERVIEW_GUIDE_API_URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Log request details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Check that the resume service is up
    Health,
    /// Upload a resume and print its analysis
    Upload { file: PathBuf },
    /// List uploaded resumes
    Resumes,
    /// Show a resume with its analyses and interviews
    Resume { id: i64 },
    /// Show an interview with every recorded answer
    InterviewDetail { session_id: String },
    /// Download the analysis report of a resume as PDF
    ExportAnalysis {
        resume_id: i64,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Download an interview report as PDF
    ExportInterview {
        session_id: String,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Mock interview sessions
    #[command(subcommand)]
    Session(SessionCommand),
    /// Answer a question of a running session
    Answer {
        session_id: String,
        question_index: i32,
        answer: String,
    },
    /// Knowledge base management
    #[command(subcommand)]
    Kb(KnowledgeBaseCommand),
}

#[derive(Subcommand)]
pub enum SessionCommand {
    /// Start a session from a resume text file
    Create {
        #[arg(long)]
        resume_text_file: PathBuf,
        #[arg(long, default_value_t = 6)]
        count: i32,
        #[arg(long)]
        resume_id: Option<i64>,
    },
    Get { session_id: String },
    /// Show the next unanswered question
    Question { session_id: String },
    /// Evaluate the session and print the report
    Report { session_id: String },
}

#[derive(Subcommand)]
pub enum KnowledgeBaseCommand {
    Upload {
        file: PathBuf,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        category: Option<String>,
    },
    List {
        #[arg(long)]
        sort_by: Option<String>,
    },
    Get { id: i64 },
    Delete { id: i64 },
    /// Ask a question against one or more knowledge bases
    Query {
        #[arg(long = "kb", required = true)]
        knowledge_base_ids: Vec<i64>,
        question: String,
    },
    Categories,
    Category { name: String },
    Uncategorized,
    /// Set or, without a value, clear the category
    SetCategory { id: i64, category: Option<String> },
    Search { keyword: String },
}

pub async fn handle_command(cli: Cli) -> Result<()> {
    let config = ClientConfig::load_with_base_url(cli.base_url.as_deref())
        .context("Failed to load client configuration")?;
    info!("Using backend at {}", config.base_url);

    let client = InterviewGuideClient::new(&config).context("Failed to create client")?;

    match cli.command {
        Command::Health => {
            let health = client
                .resume
                .health_check()
                .await
                .context("Health check failed")?;
            print_json(&health)?;
        }

        Command::Upload { file } => {
            let response = client
                .resume
                .upload_and_analyze(&file)
                .await
                .with_context(|| format!("Failed to analyse {}", file.display()))?;
            print_json(&response)?;
        }

        Command::Resumes => {
            let resumes = client
                .history
                .list_resumes()
                .await
                .context("Failed to list resumes")?;
            print_json(&resumes)?;
        }

        Command::Resume { id } => {
            let detail = client
                .history
                .get_resume_detail(id)
                .await
                .with_context(|| format!("Failed to load resume {}", id))?;
            print_json(&detail)?;
        }

        Command::InterviewDetail { session_id } => {
            let detail = client
                .history
                .get_interview_detail(&session_id)
                .await
                .with_context(|| format!("Failed to load interview {}", session_id))?;
            print_json(&detail)?;
        }

        Command::ExportAnalysis { resume_id, output } => {
            let pdf = client
                .history
                .export_analysis_pdf(resume_id)
                .await
                .with_context(|| format!("Failed to export analysis of resume {}", resume_id))?;
            let path = output.unwrap_or_else(|| {
                utils::export_file_path(Path::new("."), "analysis", &resume_id.to_string())
            });
            write_export(&path, &pdf).await?;
        }

        Command::ExportInterview { session_id, output } => {
            let pdf = client
                .history
                .export_interview_pdf(&session_id)
                .await
                .with_context(|| format!("Failed to export interview {}", session_id))?;
            let path = output.unwrap_or_else(|| {
                utils::export_file_path(Path::new("."), "interview", &session_id)
            });
            write_export(&path, &pdf).await?;
        }

        Command::Session(command) => handle_session_command(&client, command).await?,

        Command::Answer {
            session_id,
            question_index,
            answer,
        } => {
            let request = SubmitAnswerRequest {
                session_id,
                question_index,
                answer,
            };
            let response = client
                .interview
                .submit_answer(&request)
                .await
                .context("Failed to submit answer")?;
            print_json(&response)?;
        }

        Command::Kb(command) => handle_knowledge_base_command(&client, command).await?,
    }

    Ok(())
}

async fn handle_session_command(
    client: &InterviewGuideClient,
    command: SessionCommand,
) -> Result<()> {
    match command {
        SessionCommand::Create {
            resume_text_file,
            count,
            resume_id,
        } => {
            let resume_text = tokio::fs::read_to_string(&resume_text_file)
                .await
                .with_context(|| format!("Failed to read file: {}", resume_text_file.display()))?;

            let mut request = CreateInterviewRequest::new(resume_text, count);
            if let Some(resume_id) = resume_id {
                request = request.with_resume_id(resume_id);
            }

            let session = client
                .interview
                .create_session(&request)
                .await
                .context("Failed to create interview session")?;
            print_json(&session)?;
        }

        SessionCommand::Get { session_id } => {
            let session = client
                .interview
                .get_session(&session_id)
                .await
                .with_context(|| format!("Failed to load session {}", session_id))?;
            print_json(&session)?;
        }

        SessionCommand::Question { session_id } => {
            let question = client
                .interview
                .get_current_question(&session_id)
                .await
                .with_context(|| format!("Failed to load current question of {}", session_id))?;
            print_json(&question)?;
        }

        SessionCommand::Report { session_id } => {
            let report = client
                .interview
                .get_report(&session_id)
                .await
                .with_context(|| format!("Failed to build report for {}", session_id))?;
            print_json(&report)?;
        }
    }

    Ok(())
}

async fn handle_knowledge_base_command(
    client: &InterviewGuideClient,
    command: KnowledgeBaseCommand,
) -> Result<()> {
    let kb = &client.knowledge_base;

    match command {
        KnowledgeBaseCommand::Upload {
            file,
            name,
            category,
        } => {
            let response = kb
                .upload(&file, name.as_deref(), category.as_deref())
                .await
                .with_context(|| format!("Failed to upload {}", file.display()))?;
            print_json(&response)?;
        }
        KnowledgeBaseCommand::List { sort_by } => {
            let items = kb
                .list(sort_by.as_deref())
                .await
                .context("Failed to list knowledge bases")?;
            print_json(&items)?;
        }
        KnowledgeBaseCommand::Get { id } => {
            let item = kb
                .get(id)
                .await
                .with_context(|| format!("Failed to load knowledge base {}", id))?;
            print_json(&item)?;
        }
        KnowledgeBaseCommand::Delete { id } => {
            kb.delete(id)
                .await
                .with_context(|| format!("Failed to delete knowledge base {}", id))?;
            println!("Deleted knowledge base {}", id);
        }
        KnowledgeBaseCommand::Query {
            knowledge_base_ids,
            question,
        } => {
            let request = QueryRequest {
                knowledge_base_ids,
                question,
            };
            let response = kb
                .query(&request)
                .await
                .context("Knowledge base query failed")?;
            print_json(&response)?;
        }
        KnowledgeBaseCommand::Categories => {
            let categories = kb.categories().await.context("Failed to list categories")?;
            print_json(&categories)?;
        }
        KnowledgeBaseCommand::Category { name } => {
            let items = kb
                .list_by_category(&name)
                .await
                .with_context(|| format!("Failed to list category {}", name))?;
            print_json(&items)?;
        }
        KnowledgeBaseCommand::Uncategorized => {
            let items = kb
                .list_uncategorized()
                .await
                .context("Failed to list uncategorized knowledge bases")?;
            print_json(&items)?;
        }
        KnowledgeBaseCommand::SetCategory { id, category } => {
            kb.update_category(id, category.as_deref())
                .await
                .with_context(|| format!("Failed to update category of {}", id))?;
            println!("Updated category of knowledge base {}", id);
        }
        KnowledgeBaseCommand::Search { keyword } => {
            let items = kb
                .search(&keyword)
                .await
                .context("Knowledge base search failed")?;
            print_json(&items)?;
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}

async fn write_export(path: &Path, pdf: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    tokio::fs::write(path, pdf)
        .await
        .with_context(|| format!("Failed to write file: {}", path.display()))?;

    println!("Saved {} bytes to {}", pdf.len(), path.display());
    Ok(())
}
