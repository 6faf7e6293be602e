/*
 * Responsibility
 * - Config 読み込み → tracing 初期化 → 依存生成
 * - サブコマンドに応じてフォームを組み立て、submit フローを実行
 */
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, Command, CreateArgs, EditArgs};
use crate::config::{AppEnv, Config};
use crate::error::AppError;
use crate::forms::{CreateForm, SelectedFile};
use crate::services::submit::SubmitOutcome;
use crate::state::AppState;

fn init_tracing(app_env: AppEnv) {
    // Prefer RUST_LOG if set. Logs go to stderr; stdout carries only the post URL.
    let default = if app_env.is_production() {
        "info"
    } else {
        "info,post_editor=debug"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?;
    init_tracing(config.app_env);

    tracing::info!(
        "starting post-editor in {:?} mode against {}",
        config.app_env,
        config.api_base_url
    );

    let state = AppState::new(&config).map_err(AppError::from)?;

    match cli.command {
        Command::Create(args) => create(&state, args).await?,
        Command::Edit(args) => edit(&state, args).await?,
    }
    Ok(())
}

async fn create(state: &AppState, args: CreateArgs) -> Result<(), AppError> {
    let mut form = CreateForm::new();
    args.fill(&mut form);
    form.select_files(read_files(&args.images).await?);

    let mut controller = state.controller();
    conclude(controller.submit_create(&mut form).await)
}

async fn edit(state: &AppState, args: EditArgs) -> Result<(), AppError> {
    let mut controller = state.controller();
    let mut form = controller.load_edit_form(&args.post_id).await?;
    args.fill(&mut form);
    if let Some(path) = &args.image {
        form.select_file(Some(read_file(path).await?));
    }

    conclude(controller.submit_edit(&mut form).await)
}

async fn read_files(paths: &[PathBuf]) -> Result<Vec<SelectedFile>, AppError> {
    let mut files = Vec::with_capacity(paths.len());
    for path in paths {
        files.push(read_file(path).await?);
    }
    Ok(files)
}

async fn read_file(path: &Path) -> Result<SelectedFile, AppError> {
    SelectedFile::from_path(path)
        .await
        .map_err(|source| AppError::Io {
            path: path.display().to_string(),
            source,
        })
}

fn conclude(outcome: SubmitOutcome) -> Result<(), AppError> {
    match outcome {
        SubmitOutcome::Navigated(_) => Ok(()),
        SubmitOutcome::Invalid(errors) => {
            for (field, message) in errors.iter() {
                eprintln!("{field}: {message}");
            }
            Err(AppError::Invalid(errors))
        }
        SubmitOutcome::Failed(_) => Err(AppError::SubmitFailed),
    }
}
