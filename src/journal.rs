//! Event journal: optional JSON-lines log of game events.
//!
//! The terminal is in raw mode while the game runs, so nothing can be printed.
//! Set `MEMORY_LOG_PATH` to append one JSON object per event instead:
//!
//! ```text
//! {"seq":1,"board":1,"event":"started"}
//! {"seq":2,"board":1,"event":"revealed","tile":[0,3],"shape":"circle","color":"red"}
//! {"seq":4,"board":1,"event":"mismatched","tiles":[[0,3],[2,5]]}
//! ```
//!
//! A log file that cannot be opened, or a later write error, disables the
//! journal; neither interrupts the game.

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::core::GameEvent;
use crate::types::Pos;

#[derive(Debug, Serialize)]
#[serde(tag = "event", rename_all = "camelCase")]
enum RecordKind {
    Started,
    Revealed {
        tile: [u8; 2],
        shape: &'static str,
        color: &'static str,
    },
    Matched { tiles: [[u8; 2]; 2] },
    Mismatched { tiles: [[u8; 2]; 2] },
    Concealed { tiles: [[u8; 2]; 2] },
    Cleared { attempts: u32 },
}

#[derive(Debug, Serialize)]
struct Record {
    seq: u64,
    board: u32,
    #[serde(flatten)]
    kind: RecordKind,
}

fn tile(pos: Pos) -> [u8; 2] {
    [pos.row, pos.col]
}

fn pair(p: [Pos; 2]) -> [[u8; 2]; 2] {
    [tile(p[0]), tile(p[1])]
}

#[derive(Debug, Default)]
pub struct Journal {
    out: Option<BufWriter<File>>,
    seq: u64,
    board: u32,
    buf: Vec<u8>,
}

impl Journal {
    /// A journal that drops everything.
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Open the file named by `MEMORY_LOG_PATH`, if set and non-empty.
    ///
    /// See [`Journal::open_or_disabled`] for what happens when it cannot be
    /// opened.
    pub fn from_env() -> Self {
        let path = std::env::var("MEMORY_LOG_PATH")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        match path {
            Some(path) => Self::open_or_disabled(path),
            None => Self::disabled(),
        }
    }

    /// Append to `path`, creating it if needed.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            out: Some(BufWriter::new(file)),
            buf: Vec::with_capacity(256),
            ..Self::default()
        })
    }

    /// Like [`Journal::open`], but warns on stderr and returns a disabled
    /// journal on failure.
    pub fn open_or_disabled(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::open(path) {
            Ok(journal) => journal,
            Err(err) => {
                eprintln!("warning: event log {} disabled: {}", path.display(), err);
                Self::disabled()
            }
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.out.is_some()
    }

    pub fn record(&mut self, event: &GameEvent) {
        let kind = match *event {
            GameEvent::Started { board_id } => {
                self.board = board_id;
                RecordKind::Started
            }
            GameEvent::Revealed(pos, icon) => RecordKind::Revealed {
                tile: tile(pos),
                shape: icon.shape.as_str(),
                color: icon.color.as_str(),
            },
            GameEvent::Matched(p) => RecordKind::Matched { tiles: pair(p) },
            GameEvent::Mismatched(p) => RecordKind::Mismatched { tiles: pair(p) },
            GameEvent::Concealed(p) => RecordKind::Concealed { tiles: pair(p) },
            GameEvent::Cleared { board_id, attempts } => {
                self.board = board_id;
                RecordKind::Cleared { attempts }
            }
        };

        let Some(out) = self.out.as_mut() else {
            return;
        };
        self.seq += 1;
        let record = Record {
            seq: self.seq,
            board: self.board,
            kind,
        };

        self.buf.clear();
        if serde_json::to_writer(&mut self.buf, &record).is_err() {
            return;
        }
        self.buf.push(b'\n');
        if out.write_all(&self.buf).and_then(|_| out.flush()).is_err() {
            self.out = None;
        }
    }

    pub fn record_all<'a>(&mut self, events: impl IntoIterator<Item = &'a GameEvent>) {
        for event in events {
            self.record(event);
        }
    }
}
