use vastra::app::{App, AppMessage, Screen};
use vastra::auth::SessionManager;
use vastra::config::FlowConfig;
use vastra::ui;

use color_eyre::Result;
use crossterm::{
    cursor::Show,
    event::{
        DisableBracketedPaste, EnableBracketedPaste, Event, EventStream, KeyCode, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Session manager honoring the `VASTRA_SESSION_PATH` override.
///
/// Used by the CLI flags that inspect or clear the persisted session
/// without starting the TUI.
fn session_manager() -> Option<SessionManager> {
    match FlowConfig::from_env().session_path {
        Some(path) => Some(SessionManager::with_path(path)),
        None => SessionManager::new(),
    }
}

/// Handle the --whoami flag: print the signed-in member and exit.
fn handle_whoami_command() -> Result<()> {
    let manager = match session_manager() {
        Some(m) => m,
        None => {
            eprintln!("Error: could not determine home directory");
            std::process::exit(1);
        }
    };

    match manager.load() {
        Some(session) => {
            println!("{} <{}>", session.user.name, session.user.email);
            if let Some(phone) = &session.user.phone {
                println!("phone: {}", phone);
            }
        }
        None => {
            println!("Not signed in.");
        }
    }

    Ok(())
}

/// Handle the --logout flag: clear the persisted session and exit.
fn handle_logout_command() -> Result<()> {
    let manager = match session_manager() {
        Some(m) => m,
        None => {
            eprintln!("Error: could not determine home directory");
            std::process::exit(1);
        }
    };

    match manager.load() {
        Some(session) => {
            if manager.clear() {
                println!("Signed out {}.", session.user.email);
            } else {
                eprintln!(
                    "Error: failed to remove {}",
                    manager.session_path().display()
                );
                std::process::exit(1);
            }
        }
        None => {
            println!("Not signed in.");
        }
    }

    Ok(())
}

/// Route tracing output to a file under the session directory.
///
/// The TUI owns the terminal, so logs can never go to stdout; `RUST_LOG`
/// still controls the filter.
fn init_tracing() -> Result<()> {
    let log_path = match dirs::home_dir() {
        Some(home) => home.join(".vastra").join("vastra.log"),
        None => std::env::temp_dir().join("vastra.log"),
    };
    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;
    let fmt_layer = fmt::layer().with_ansi(false).with_writer(Arc::new(log_file));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();

    Ok(())
}

fn main() -> Result<()> {
    // Handle --version flag before any initialization
    if std::env::args().any(|arg| arg == "--version") {
        println!("vastra {}", VERSION);
        std::process::exit(0);
    }

    // Handle --whoami flag: report the persisted session
    if std::env::args().any(|arg| arg == "--whoami") {
        return handle_whoami_command();
    }

    // Handle --logout flag: sign out without starting the TUI
    if std::env::args().any(|arg| arg == "--logout") {
        return handle_logout_command();
    }

    color_eyre::install()?;
    init_tracing()?;

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    // Create Tokio runtime for the entire application
    let runtime = tokio::runtime::Runtime::new()?;

    let config = FlowConfig::from_env();
    let mut app = App::new(config)?;

    // Hydrate the persisted session before the first frame so the
    // storefront greets returning members immediately
    runtime.block_on(app.initialize());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();

    // Enter alternate screen and enable bracketed paste so pasted
    // codes arrive as one event
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Clear the terminal
    terminal.clear()?;

    // Main event loop
    let result = runtime.block_on(run_app(&mut terminal, &mut app));

    // Restore terminal
    restore_terminal(&mut terminal)?;

    result
}

/// Setup panic hook to restore terminal on panic
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Try to restore terminal state
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        let _ = execute!(io::stdout(), Show);

        // Call the original panic hook
        original_hook(panic_info);
    }));
}

/// Restore terminal to normal mode
fn restore_terminal<B: ratatui::backend::Backend + std::io::Write>(
    terminal: &mut Terminal<B>,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    // Create async event stream for keyboard input
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        // The account screen bounces signed-out visitors; run its gate
        // before every frame
        app.apply_gate();

        // Draw the UI only when needed (tick() re-dirties while a
        // request is on the wire, keeping spinners moving)
        if app.needs_redraw {
            terminal.draw(|f| {
                ui::render(f, &mut *app);
            })?;
            app.needs_redraw = false;
        }

        // Poll both keyboard events and the message channel using tokio::select!
        // 16ms tick drives the spinner and resend cooldown animations
        let timeout = tokio::time::sleep(std::time::Duration::from_millis(16));

        tokio::select! {
            // Handle timeout for animations and timers
            _ = timeout => {
                app.tick();
            }

            // Handle keyboard events
            event_result = event_stream.next() => {
                if let Some(Ok(event)) = event_result {
                    match event {
                        Event::Resize(_, _) => {
                            app.mark_dirty();
                            continue;
                        }
                        Event::Key(key) if key.kind == KeyEventKind::Press => {
                            // Any key press likely changes state (input, navigation)
                            app.mark_dirty();

                            // Global keybinds (always active)
                            match key.code {
                                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                                    app.quit();
                                    return Ok(());
                                }
                                _ => {}
                            }

                            // Storefront navigation keys
                            if app.screen == Screen::Storefront {
                                match key.code {
                                    KeyCode::Char('l') => {
                                        app.navigate_to_login();
                                        continue;
                                    }
                                    KeyCode::Char('s') => {
                                        app.navigate_to_signup();
                                        continue;
                                    }
                                    KeyCode::Char('a') => {
                                        app.navigate_to_account();
                                        continue;
                                    }
                                    KeyCode::Char('q') => {
                                        app.quit();
                                        return Ok(());
                                    }
                                    _ => {}
                                }
                            }

                            // Login form keys
                            if app.screen == Screen::Login {
                                match key.code {
                                    KeyCode::Tab | KeyCode::Down => {
                                        app.login_form.focus_next();
                                        continue;
                                    }
                                    KeyCode::BackTab | KeyCode::Up => {
                                        app.login_form.focus_prev();
                                        continue;
                                    }
                                    KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                                        app.login_form.toggle_show_password();
                                        continue;
                                    }
                                    KeyCode::Enter => {
                                        app.submit_login();
                                        continue;
                                    }
                                    KeyCode::Esc => {
                                        app.navigate_to_storefront();
                                        continue;
                                    }
                                    KeyCode::Backspace => {
                                        app.login_form.backspace();
                                        continue;
                                    }
                                    // Plain characters (no modifiers or only SHIFT)
                                    KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER) => {
                                        app.login_form.insert_char(c);
                                        continue;
                                    }
                                    _ => {}
                                }
                            }

                            // Signup form keys. Typing can complete the OTP
                            // buffer, which hands the code off to verification.
                            if app.screen == Screen::Signup {
                                match key.code {
                                    KeyCode::Tab | KeyCode::Down => {
                                        app.signup_form.focus_next();
                                        continue;
                                    }
                                    KeyCode::BackTab | KeyCode::Up => {
                                        app.signup_form.focus_prev();
                                        continue;
                                    }
                                    KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                                        app.dispatch_send_otp();
                                        continue;
                                    }
                                    KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                                        app.signup_form.toggle_show_password();
                                        continue;
                                    }
                                    KeyCode::Enter => {
                                        app.submit_register();
                                        continue;
                                    }
                                    KeyCode::Esc => {
                                        app.navigate_to_storefront();
                                        continue;
                                    }
                                    KeyCode::Backspace => {
                                        app.signup_form.backspace();
                                        continue;
                                    }
                                    // Plain characters (no modifiers or only SHIFT)
                                    KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER) => {
                                        app.signup_form.insert_char(c);
                                        if let Some(code) = app.signup_form.otp.ready_code() {
                                            app.dispatch_verify_otp(code);
                                        }
                                        continue;
                                    }
                                    _ => {}
                                }
                            }

                            // Account screen keys
                            if app.screen == Screen::Account {
                                match key.code {
                                    KeyCode::Char('l') => {
                                        app.request_logout();
                                        continue;
                                    }
                                    KeyCode::Esc => {
                                        app.navigate_to_storefront();
                                        continue;
                                    }
                                    KeyCode::Char('q') => {
                                        app.quit();
                                        return Ok(());
                                    }
                                    _ => {}
                                }
                            }
                        }
                        Event::Paste(text) => {
                            // Bracketed paste lands in the focused field; a
                            // pasted OTP can complete the buffer too
                            match app.screen {
                                Screen::Login => app.login_form.insert_str(&text),
                                Screen::Signup => {
                                    app.signup_form.insert_str(&text);
                                    if let Some(code) = app.signup_form.otp.ready_code() {
                                        app.dispatch_verify_otp(code);
                                    }
                                }
                                _ => {}
                            }
                            app.mark_dirty();
                            continue;
                        }
                        _ => {
                            // Ignore other events (focus, etc.)
                        }
                    }
                }
            }

            // Handle async results from auth requests
            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg).await;
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
