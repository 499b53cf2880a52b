use thiserror::Error;

/// Chunk splitting parameters, validated before use.
#[derive(Debug, Clone, Copy)]
pub struct ChunkConfig {
    pub max_chars: usize,
    pub overlap_chars: usize,
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self {
            max_chars: 8000,
            overlap_chars: 400,
        }
    }
}

#[derive(Error, Debug)]
pub enum ChunkConfigError {
    #[error("chunk budget must be greater than zero")]
    ZeroBudget,

    #[error("overlap of {overlap} chars must be smaller than the chunk budget of {max} chars")]
    OverlapTooLarge { overlap: usize, max: usize },
}

impl ChunkConfig {
    /// Reject configurations that could never terminate: a window must
    /// always advance by at least one character.
    pub fn validate(&self) -> Result<(), ChunkConfigError> {
        if self.max_chars == 0 {
            return Err(ChunkConfigError::ZeroBudget);
        }
        if self.overlap_chars >= self.max_chars {
            return Err(ChunkConfigError::OverlapTooLarge {
                overlap: self.overlap_chars,
                max: self.max_chars,
            });
        }
        Ok(())
    }
}

/// A contiguous slice of the source document, possibly overlapping its
/// neighbors. Index order is evaluation and presentation order.
#[derive(Debug, Clone)]
pub struct Chunk {
    pub index: usize,
    pub text: String,
}

/// Split `text` into overlapping chunks of at most `max_chars` characters.
///
/// Text at or under the budget comes back as a single chunk equal to the
/// whole input. Larger text is windowed: each chunk starts
/// `max_chars - overlap_chars` characters after the previous one, so
/// consecutive chunks share `overlap_chars` characters and the final chunk
/// may run short. Budgets count characters, not bytes, so multi-byte input
/// never splits mid-codepoint.
pub fn split_with_overlap(text: &str, config: ChunkConfig) -> Result<Vec<Chunk>, ChunkConfigError> {
    config.validate()?;

    // Byte offset of every char boundary, with the end of the text appended
    // so `boundaries[i]..boundaries[j]` slices chars i..j.
    let boundaries: Vec<usize> = text
        .char_indices()
        .map(|(offset, _)| offset)
        .chain([text.len()])
        .collect();
    let total_chars = boundaries.len() - 1;

    if total_chars <= config.max_chars {
        return Ok(vec![Chunk {
            index: 0,
            text: text.to_string(),
        }]);
    }

    let step = config.max_chars - config.overlap_chars;
    let mut chunks = Vec::new();
    let mut start = 0;

    loop {
        let end = (start + config.max_chars).min(total_chars);
        chunks.push(Chunk {
            index: chunks.len(),
            text: text[boundaries[start]..boundaries[end]].to_string(),
        });
        if end == total_chars {
            break;
        }
        start += step;
    }

    Ok(chunks)
}
