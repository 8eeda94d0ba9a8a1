use super::terminal_commands::{field_text, parse_command, Command};
use crate::app::App;
use log::warn;
use std::{future::Future, io::Write};
use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt},
    task::JoinSet,
};

/// # Run Session
///
/// Mounts the page and runs the event loop until `quit` or the end of the input.
/// Every input line and every settled request re-renders the page.
///
/// Network actions run as spawned tasks so input keeps being read while they are in
/// flight. On exit the loop waits for all of them and renders the final page.
///
/// # Parameters
///
/// - `app`: The root composer holding the post store and the creation form.
/// - `input`: Line source, stdin for the binary.
/// - `output`: Where pages and command errors are written.
pub async fn run_session<R, W>(app: App, input: R, output: &mut W) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut tasks = JoinSet::new();

    let mounting = app.clone();
    spawn_action(&mut tasks, async move { mounting.mount().await }).await;
    print_page(output, &app)?;
    writeln!(output, "Type `help` for the list of commands.")?;

    let mut lines = input.lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                if line.trim().is_empty() {
                    continue;
                }
                match parse_command(&line) {
                    Ok(Command::Quit) => break,
                    Ok(Command::Title { words }) => {
                        app.form().set_title(field_text(&words));
                        print_page(output, &app)?;
                    }
                    Ok(Command::Description { words }) => {
                        app.form().set_description(field_text(&words));
                        print_page(output, &app)?;
                    }
                    Ok(Command::Submit) => {
                        let submitting = app.clone();
                        spawn_action(&mut tasks, async move {
                            submitting.submit().await;
                        })
                        .await;
                        print_page(output, &app)?;
                    }
                    Ok(Command::Delete { id }) => {
                        let deleting = app.clone();
                        spawn_action(&mut tasks, async move { deleting.delete_post(id).await }).await;
                        print_page(output, &app)?;
                    }
                    Ok(Command::Refresh) => {
                        let refreshing = app.clone();
                        spawn_action(&mut tasks, async move { refreshing.refresh().await }).await;
                        print_page(output, &app)?;
                    }
                    Err(e) => write!(output, "{}", e)?,
                }
            }
            Some(settled) = tasks.join_next() => {
                if let Err(e) = settled {
                    warn!("request task failed: {}", e);
                }
                print_page(output, &app)?;
            }
        }
    }

    if !tasks.is_empty() {
        while let Some(settled) = tasks.join_next().await {
            if let Err(e) = settled {
                warn!("request task failed: {}", e);
            }
        }
        print_page(output, &app)?;
    }

    Ok(())
}

/// Spawns a request and lets it run up to its first suspension point, so the page
/// rendered right after shows it as in flight.
async fn spawn_action<F>(tasks: &mut JoinSet<()>, action: F)
where
    F: Future<Output = ()> + Send + 'static,
{
    tasks.spawn(action);
    tokio::task::yield_now().await;
}

fn print_page<W: Write>(output: &mut W, app: &App) -> std::io::Result<()> {
    writeln!(output)?;
    write!(output, "{}", app.render())?;
    output.flush()
}
