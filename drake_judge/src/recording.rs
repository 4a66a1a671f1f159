use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use serde::Serialize;
use thedrake::GameState;

use crate::GameRecord;

pub struct Recorder {
    num: usize,
    directory: PathBuf,
}

impl Recorder {
    pub fn new(directory: PathBuf) -> anyhow::Result<Self> {
        if !directory.is_dir() {
            anyhow::bail!("Directory '{}' does not exist", directory.display());
        }
        Ok(Self { num: 1, directory })
    }

    /// Writes the game to `game_NNNNNN.json`, numbering games from 1.
    pub fn write_game_recording(&mut self, record: &GameRecord) -> anyhow::Result<PathBuf> {
        let filepath = self.directory.join(format!("game_{:0>6}.json", self.num));
        let writer = BufWriter::new(File::create(&filepath)?);
        let recording = GameRecording {
            moves: record.moves.iter().map(|mv| mv.to_string()).collect(),
            final_state: &record.final_state,
        };
        serde_json::to_writer_pretty(writer, &recording)?;
        self.num += 1;
        Ok(filepath)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GameRecording<'a> {
    moves: Vec<String>,
    final_state: &'a GameState,
}
