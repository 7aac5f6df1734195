//! Interactive shell: a search prompt that stays available while lookups run.

use std::{io::Write, sync::Arc};

use anyhow::{Context, Result};
use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt, BufReader},
    sync::mpsc,
};
use weathernow_core::{Effect, Event, LookupError, ViewState, WeatherLookup, WeatherView};

use crate::render::{PROMPT, Screen};

type Resolution = (u64, Result<WeatherView, LookupError>);

/// Run the shell on stdin and stdout.
pub async fn run(lookup: Arc<WeatherLookup>, default_city: String) -> Result<()> {
    let input = BufReader::new(tokio::io::stdin());
    run_with(lookup, default_city, input, std::io::stdout()).await
}

/// Run the shell until `input` is exhausted and the latest lookup has resolved.
///
/// Each line replaces the query and starts a lookup in its own task. Results come back
/// over a channel and go through the same update function, so the state decides whether
/// a result is still current.
async fn run_with<R, W>(
    lookup: Arc<WeatherLookup>,
    default_city: String,
    input: R,
    mut out: W,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let (tx, mut rx) = mpsc::unbounded_channel::<Resolution>();
    let mut state = ViewState::new(default_city);
    let mut lines = input.lines();
    let mut input_open = true;

    let effect = state.update(Event::Mount);
    apply(effect, &state, &lookup, &tx, &mut out)?;

    loop {
        tokio::select! {
            line = lines.next_line(), if input_open => {
                match line.context("Failed to read input")? {
                    Some(text) => {
                        state.update(Event::Edit(text));
                        let effect = state.update(Event::Submit);
                        apply(effect, &state, &lookup, &tx, &mut out)?;
                    }
                    None => {
                        tracing::debug!("input closed");
                        input_open = false;
                    }
                }
            }
            Some((seq, outcome)) = rx.recv() => {
                let effect = state.update(Event::Resolved { seq, outcome });
                apply(effect, &state, &lookup, &tx, &mut out)?;
            }
        }

        if !input_open && !state.is_loading() {
            break;
        }
    }

    Ok(())
}

fn apply<W: Write>(
    effect: Effect,
    state: &ViewState,
    lookup: &Arc<WeatherLookup>,
    tx: &mpsc::UnboundedSender<Resolution>,
    out: &mut W,
) -> Result<()> {
    match effect {
        Effect::Ignore => return Ok(()),
        Effect::Redraw => {}
        Effect::Lookup { seq, city } => spawn_lookup(seq, city, lookup, tx),
    }

    draw(state, out)
}

fn spawn_lookup(
    seq: u64,
    city: String,
    lookup: &Arc<WeatherLookup>,
    tx: &mpsc::UnboundedSender<Resolution>,
) {
    let lookup = Arc::clone(lookup);
    let tx = tx.clone();

    tokio::spawn(async move {
        tracing::debug!(seq, %city, "lookup started");
        let outcome = lookup.lookup(&city).await;
        // The shell may already be gone; nothing left to update then.
        let _ = tx.send((seq, outcome));
    });
}

fn draw<W: Write>(state: &ViewState, out: &mut W) -> Result<()> {
    write!(out, "\n{}\n{PROMPT}", Screen(state)).context("Failed to write frame")?;
    out.flush().context("Failed to flush output")
}
