use std::io::Write;
use std::time::Instant;
use crate::config::config_manager::ConfigManager;
use crate::errors::BenchDiffResult;
use crate::helpers::prompt_generator::generate_prompt;
use crate::logger::console_reporter::ConsoleReporter;
use crate::services::ai_providers::gemini::GeminiProvider;
use crate::services::diff_renderer::DiffRenderer;
use crate::services::file_loader::FileLoader;
use crate::structs::cli::Cli;
use crate::structs::config::app_config::AppConfig;
use crate::traits::ai_provider::AiProvider;

pub struct CommandRunner {
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub const fn new() -> Self {
        Self {
            start_time: None,
        }
    }

    /// Resolves configuration from the process environment and runs against Gemini.
    pub async fn run_command(&mut self, cli: Cli) -> BenchDiffResult<()> {
        self.start_time = Some(Instant::now());

        let file_config = ConfigManager::load(cli.config.as_deref())?;
        let config = ConfigManager::resolve(file_config, &cli, |name| std::env::var(name).ok())?;
        log::info!("🔧 Resolved configuration: {:?}", config);

        let provider = GeminiProvider::from_config(&config);
        let mut reporter = ConsoleReporter::stdout();

        let result = self.compare(&cli, &config, &provider, &mut reporter).await;

        if let Some(start) = self.start_time {
            let duration = start.elapsed();
            log::info!("⏱️  Command completed in {:.2}s", duration.as_secs_f64());
        }

        result
    }

    /// Reads both files, optionally prints their diff, then prints the model's summary.
    /// The summary request is made even when the files are identical.
    pub async fn compare<W: Write>(
        &self,
        cli: &Cli,
        config: &AppConfig,
        provider: &dyn AiProvider,
        reporter: &mut ConsoleReporter<W>,
    ) -> BenchDiffResult<()> {
        let previous = FileLoader::read(&cli.prev_file)?;
        let current = FileLoader::read(&cli.current_file)?;

        if cli.show_diff {
            let diff = DiffRenderer::render(&previous, &current);
            reporter.print_diff(&diff)?;
        }

        let prompt = generate_prompt(&previous, &current, &config.focus_subject);

        log::info!("🔍 Requesting benchmark summary ({} prompt bytes)...", prompt.len());
        let summary = provider.chat(prompt).await?;

        reporter.print_summary(&summary)?;

        Ok(())
    }
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new()
    }
}
