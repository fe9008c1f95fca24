use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;

use anyhow::{anyhow, Result};
use board_core::{update, BoardState, BoardViewModel, Msg};
use board_logging::{board_debug, board_info, set_gesture_seq};

use super::{config, effects, logging, script, ui};

pub fn run_app() -> Result<()> {
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = config::load_config(config_path.as_deref())?;
    logging::initialize(&config.log);
    match &config_path {
        Some(path) => board_info!("Loaded config from {}", path.display()),
        None => board_info!("No config file given; using defaults"),
    }

    let gestures = config.script.clone().unwrap_or_else(script::demo_script);
    let (msg_tx, msg_rx) = mpsc::channel::<(u64, Msg)>();

    // Gesture provider: serializes the script into the message queue the way
    // a UI event loop would.
    let provider = thread::spawn(move || {
        for (seq, gesture) in (1u64..).zip(gestures) {
            for msg in gesture.into_msgs() {
                if msg_tx.send((seq, msg)).is_err() {
                    return;
                }
            }
        }
    });

    let mut app = App::new(BoardState::from_config(&config.board), io::stdout().lock());
    app.render_now()?;
    for (seq, msg) in msg_rx {
        app.dispatch_msg(seq, msg)?;
    }

    provider
        .join()
        .map_err(|_| anyhow!("gesture provider thread panicked"))
}

/// Owns the board state and re-renders to `out` whenever a message leaves
/// it dirty.
pub struct App<W: Write> {
    state: BoardState,
    out: W,
}

impl<W: Write> App<W> {
    pub fn new(state: BoardState, out: W) -> Self {
        Self { state, out }
    }

    pub fn dispatch_msg(&mut self, seq: u64, msg: Msg) -> io::Result<()> {
        set_gesture_seq(seq);
        board_debug!("Dispatching {:?}", msg);

        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        let view = state.view();
        self.state = state;

        for notice in effects::describe(&effects) {
            writeln!(self.out, "* {notice}")?;
        }
        if was_dirty {
            self.render(&view)?;
        }
        Ok(())
    }

    pub fn render_now(&mut self) -> io::Result<()> {
        let view = self.state.view();
        self.render(&view)
    }

    fn render(&mut self, view: &BoardViewModel) -> io::Result<()> {
        for line in ui::render::render(view) {
            writeln!(self.out, "{line}")?;
        }
        writeln!(self.out)?;
        self.out.flush()
    }

    #[cfg(test)]
    fn into_parts(self) -> (BoardState, W) {
        (self.state, self.out)
    }
}
