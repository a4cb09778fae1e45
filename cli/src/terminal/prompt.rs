use std::future::{self, Future};
use std::io::{self, BufRead, IsTerminal};
use std::thread;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode},
};

use tokio::{signal, sync::oneshot};

use bluetap_common::error::BluetapError;

use crate::terminal::print;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Answer {
    Yes,
    No,
    Interrupted,
}

/// Asks a yes/no question, defaulting to yes.
///
/// Reads single key presses on a terminal and a whole line otherwise.
/// Ctrl-C aborts the run.
pub async fn confirm(question: &str) -> anyhow::Result<bool> {
    print::question(question);

    let answer: Answer = if io::stdin().is_terminal() {
        read_key()?
    } else {
        let line = spawn_line_reader();
        let answer = async move { Ok::<_, anyhow::Error>(parse_line(&line.await??)) };
        or_interrupted(answer, interrupt_signal()).await?
    };

    decision(answer)
}

fn decision(answer: Answer) -> anyhow::Result<bool> {
    match answer {
        Answer::Yes => Ok(true),
        Answer::No => Ok(false),
        Answer::Interrupted => Err(BluetapError::Interrupted {
            during: "playback prompt".to_string(),
        }
        .into()),
    }
}

/// Resolves on Ctrl-C. Never resolves when the signal cannot be watched.
async fn interrupt_signal() {
    if signal::ctrl_c().await.is_err() {
        future::pending::<()>().await;
    }
}

/// Gives up on `answer` as soon as `interrupt` resolves.
async fn or_interrupted<A, I>(answer: A, interrupt: I) -> anyhow::Result<Answer>
where
    A: Future<Output = anyhow::Result<Answer>>,
    I: Future<Output = ()>,
{
    tokio::select! {
        biased;

        () = interrupt => Ok(Answer::Interrupted),
        answer = answer => answer,
    }
}

/// Reads one line of stdin on a detached thread.
///
/// A pending read does not keep the process alive once the answer is no
/// longer awaited.
fn spawn_line_reader() -> oneshot::Receiver<io::Result<String>> {
    let (sender, receiver) = oneshot::channel();
    thread::spawn(move || {
        let mut line = String::new();
        let result = io::stdin().lock().read_line(&mut line).map(|_| line);
        let _ = sender.send(result);
    });
    receiver
}

fn read_key() -> anyhow::Result<Answer> {
    enable_raw_mode()?;
    let answer = wait_for_answer();
    disable_raw_mode()?;
    answer
}

fn wait_for_answer() -> anyhow::Result<Answer> {
    loop {
        let Event::Key(key_event) = event::read()? else {
            continue;
        };
        if key_event.kind != KeyEventKind::Press {
            continue;
        }

        let is_ctrl_c = key_event.code == KeyCode::Char('c')
            && key_event.modifiers.contains(KeyModifiers::CONTROL);
        if is_ctrl_c {
            return Ok(Answer::Interrupted);
        }

        match key_event.code {
            KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => return Ok(Answer::Yes),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => return Ok(Answer::No),
            _ => {}
        }
    }
}

/// An empty line means yes; otherwise only "y" and "yes" do, in any case.
fn parse_line(line: &str) -> Answer {
    let answer = line.trim().to_lowercase();
    match answer.as_str() {
        "" | "y" | "yes" => Answer::Yes,
        _ => Answer::No,
    }
}
