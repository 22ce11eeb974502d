use cardsort::app::{App, AppMessage};
use cardsort::cli::{parse_args, run_cli_command, CliCommand};
use cardsort::config::AppConfig;
use cardsort::error::CardsortError;
use cardsort::logging::init_logging;
use cardsort::terminal::{setup_panic_hook, TerminalManager};
use cardsort::ui;
use color_eyre::Result;
use crossterm::event::EventStream;
use futures::StreamExt;
use ratatui::backend::Backend;
use ratatui::Terminal;
use tokio::sync::mpsc;

fn main() -> Result<()> {
    // Flags first so --version and --help never touch the terminal
    let command = parse_args(std::env::args())?;
    if let Some(result) = run_cli_command(&command) {
        return result;
    }
    let CliCommand::Run(options) = command else {
        return Ok(());
    };

    color_eyre::install()?;
    setup_panic_hook();

    let config = options.apply(AppConfig::from_env());
    init_logging(&config)?;
    tracing::info!("Starting cardsort {}", cardsort::cli::VERSION);

    let mut app = match App::from_config(&config) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!("Startup failed: {}", e);
            eprintln!("{}", e.user_message());
            return Err(e.into());
        }
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let mut manager = TerminalManager::new()?;
    let size = manager.terminal().size()?;
    app.terminal_width = size.width;
    app.terminal_height = size.height;

    let result = runtime.block_on(run_app(manager.terminal(), &mut app, &config));

    manager.restore();
    tracing::info!("Exiting with sort order {:?}", app.sort_order);
    result
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App, config: &AppConfig) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();
    let mut tick = tokio::time::interval(config.tick_rate);

    // Owned here so select! can borrow it alongside `app`
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, &mut *app))?;
            app.needs_redraw = false;
        }

        tokio::select! {
            _ = tick.tick() => {}

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(event)) => app.handle_event(&event),
                    Some(Err(e)) => {
                        tracing::error!("Terminal event error: {}", e);
                        return Err(e.into());
                    }
                    None => return Ok(()),
                }
            }

            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                match msg {
                    Some(msg) => app.handle_message(msg),
                    None => return Err(CardsortError::Channel.into()),
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
