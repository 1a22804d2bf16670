use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::{Env, Target};

use mcp_reasoning::cli::{self, Cli};
use mcp_reasoning::error::{ToolError, handle_tool_error};
use mcp_reasoning::stdio::{ReasoningServer, SERVER_NAME, SERVER_VERSION, metadata};

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "warn";

#[tokio::main]
async fn main() -> ExitCode {
    // Diagnostics go to stderr; stdout carries the protocol
    env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_LOG_FILTER))
        .target(Target::Stderr)
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!(
                "Failed to start MCP server: {}",
                handle_tool_error(&ToolError::from(e))
            );
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    if cli.list_tools {
        println!("Available tools:");
        for tool in metadata::all_tool_metadata() {
            println!("  - {} ({}): {}", tool.name, tool.category, tool.summary());
        }
        return Ok(());
    }

    let enabled_tools = cli.enabled_tools()?;

    // Validate before any initialization
    if let Some(ref tools) = enabled_tools {
        let invalid = cli::unknown_tools(tools);
        if !invalid.is_empty() {
            eprintln!("Error: Invalid tool names specified:");
            for tool in &invalid {
                eprintln!("  - {tool}");
            }
            eprintln!();
            eprintln!("Available tools:");
            for tool in cli::available_tools() {
                eprintln!("  - {tool}");
            }
            eprintln!();
            eprintln!("Tip: Use --list-tools to see all available tools");
            return Err(anyhow::anyhow!("Invalid tool names specified"));
        }
    }

    log::info!("Initializing {SERVER_NAME} v{SERVER_VERSION}...");

    // Cancellation token for graceful shutdown
    let shutdown_token = tokio_util::sync::CancellationToken::new();

    let signal_token = shutdown_token.clone();
    tokio::spawn(async move {
        wait_for_interrupt().await;
        log::debug!("Received interrupt signal, shutting down");
        signal_token.cancel();
    });

    ReasoningServer::new(enabled_tools)
        .serve_stdio(shutdown_token)
        .await
        .context("stdio transport failed")
}

/// Wait for interrupt signal (cross-platform)
#[cfg(unix)]
async fn wait_for_interrupt() {
    use tokio::signal::unix::{SignalKind, signal};

    let mut sigterm_result = signal(SignalKind::terminate());
    let mut sigint_result = signal(SignalKind::interrupt());

    match (sigterm_result.as_mut(), sigint_result.as_mut()) {
        (Ok(sigterm), Ok(sigint)) => {
            tokio::select! {
                _ = sigterm.recv() => {}
                _ = sigint.recv() => {}
            }
        }
        (Ok(sigterm), Err(_)) => {
            let _ = sigterm.recv().await;
        }
        (Err(_), Ok(sigint)) => {
            let _ = sigint.recv().await;
        }
        (Err(_), Err(_)) => {
            let () = std::future::pending().await;
        }
    }
}

/// Wait for interrupt signal (cross-platform)
#[cfg(windows)]
async fn wait_for_interrupt() {
    match tokio::signal::windows::ctrl_c() {
        Ok(mut ctrl_c) => {
            let _ = ctrl_c.recv().await;
        }
        Err(_) => {
            let () = std::future::pending().await;
        }
    }
}
