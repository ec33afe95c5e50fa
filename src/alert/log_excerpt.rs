use anyhow::Context;
use std::{
    fs::{self, File},
    io::{self, Read, Seek, SeekFrom},
    path::Path,
};
use tracing::error;

/// Size of the blocks the source log is read in, starting from its end.
const READ_CHUNK_SIZE: u64 = 64 * 1024;

/// Writes the last `lines` lines of the `source` log to the `destination` file, replacing it if it
/// exists. A source log that cannot be read yields an empty excerpt, the same way `tail` leaves an
/// empty file behind when its output is redirected.
pub fn write_log_excerpt(source: &Path, destination: &Path, lines: usize) -> anyhow::Result<()> {
    let excerpt = File::open(source)
        .and_then(|mut file| read_tail(&mut file, lines, READ_CHUNK_SIZE))
        .unwrap_or_else(|err| {
            error!("Cannot read source log {source:?}: {err:?}");
            vec![]
        });

    fs::write(destination, excerpt)
        .with_context(|| format!("Cannot write log excerpt to {destination:?}."))
}

/// Reads the last `lines` lines of `reader` going backwards from its end in `chunk_size` blocks.
/// Only the blocks that hold the requested lines are read.
fn read_tail<R: Read + Seek>(reader: &mut R, lines: usize, chunk_size: u64) -> io::Result<Vec<u8>> {
    if lines == 0 {
        return Ok(vec![]);
    }

    let mut start = reader.seek(SeekFrom::End(0))?;
    let mut content = vec![];
    while start > 0 {
        let chunk_start = start.saturating_sub(chunk_size);
        let mut chunk = vec![0; (start - chunk_start) as usize];
        reader.seek(SeekFrom::Start(chunk_start))?;
        reader.read_exact(&mut chunk)?;

        chunk.extend_from_slice(&content);
        content = chunk;
        start = chunk_start;

        // The first line of the excerpt starts within what's been read already.
        if tail(&content, lines).len() < content.len() {
            break;
        }
    }

    let excerpt_start = content.len() - tail(&content, lines).len();
    content.drain(..excerpt_start);

    Ok(content)
}

/// Returns the trailing slice of `content` that holds its last `lines` lines.
fn tail(content: &[u8], lines: usize) -> &[u8] {
    if lines == 0 {
        return &[];
    }

    // Terminating newline belongs to the last line.
    let body = content.strip_suffix(b"\n").unwrap_or(content);

    let mut remaining = lines;
    for (index, byte) in body.iter().enumerate().rev() {
        if *byte == b'\n' {
            remaining -= 1;
            if remaining == 0 {
                return &content[index + 1..];
            }
        }
    }

    content
}
