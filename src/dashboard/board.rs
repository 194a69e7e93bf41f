//! Board position display model
//!
//! Only the piece-placement field of a FEN is interpreted; the rest of the
//! record is treated as an opaque position identifier.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Placement field of the standard initial position
pub const START_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// Unparseable position
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("expected 8 ranks, found {0}")]
    RankCount(usize),

    #[error("rank {rank} does not describe 8 files")]
    RankWidth { rank: usize },

    #[error("invalid piece character '{0}'")]
    InvalidPiece(char),
}

/// How pieces are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PieceTheme {
    /// Chess symbols (♔ ♞ ...)
    #[default]
    Unicode,
    /// FEN letters (K n ...)
    Letters,
}

impl FromStr for PieceTheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "unicode" => Ok(PieceTheme::Unicode),
            "letters" => Ok(PieceTheme::Letters),
            _ => Err(format!("Invalid piece theme: {}", s)),
        }
    }
}

/// A piece, stored as its FEN letter (uppercase = white)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece(char);

impl Piece {
    pub fn from_fen_char(c: char) -> Option<Self> {
        matches!(c.to_ascii_lowercase(), 'p' | 'n' | 'b' | 'r' | 'q' | 'k').then_some(Piece(c))
    }

    pub fn is_white(&self) -> bool {
        self.0.is_ascii_uppercase()
    }

    /// Colour-prefixed code, e.g. `wK`, `bN`
    pub fn code(&self) -> String {
        let colour = if self.is_white() { 'w' } else { 'b' };
        format!("{}{}", colour, self.0.to_ascii_uppercase())
    }

    /// Display glyph for a theme, looked up by the piece's lowercase code
    pub fn glyph(&self, theme: PieceTheme) -> char {
        match theme {
            PieceTheme::Letters => self.0,
            PieceTheme::Unicode => match self.code().to_lowercase().as_str() {
                "wk" => '♔',
                "wq" => '♕',
                "wr" => '♖',
                "wb" => '♗',
                "wn" => '♘',
                "wp" => '♙',
                "bk" => '♚',
                "bq" => '♛',
                "br" => '♜',
                "bb" => '♝',
                "bn" => '♞',
                _ => '♟',
            },
        }
    }
}

/// 8x8 piece grid, rank 8 first, file a first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// Standard initial position
    pub fn start() -> Self {
        Self::parse_placement(START_PLACEMENT).unwrap_or_else(|_| Self::empty())
    }

    pub fn empty() -> Self {
        Self {
            squares: [[None; 8]; 8],
        }
    }

    /// Parse a FEN record, or the literal `start`.
    pub fn from_fen(fen: &str) -> Result<Self, BoardError> {
        let fen = fen.trim();
        if fen.is_empty() || fen.eq_ignore_ascii_case("start") {
            return Ok(Self::start());
        }
        let placement = fen.split_whitespace().next().unwrap_or_default();
        Self::parse_placement(placement)
    }

    fn parse_placement(placement: &str) -> Result<Self, BoardError> {
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(BoardError::RankCount(ranks.len()));
        }

        let mut board = Self::empty();
        for (row, rank) in ranks.iter().enumerate() {
            let mut col = 0usize;
            for c in rank.chars() {
                if let Some(skip) = c.to_digit(10) {
                    col += skip as usize;
                } else {
                    let piece = Piece::from_fen_char(c).ok_or(BoardError::InvalidPiece(c))?;
                    if col >= 8 {
                        return Err(BoardError::RankWidth { rank: 8 - row });
                    }
                    board.squares[row][col] = Some(piece);
                    col += 1;
                }
            }
            if col != 8 {
                return Err(BoardError::RankWidth { rank: 8 - row });
            }
        }
        Ok(board)
    }

    pub fn rows(&self) -> &[[Option<Piece>; 8]; 8] {
        &self.squares
    }

    pub fn piece_count(&self) -> usize {
        self.squares.iter().flatten().filter(|p| p.is_some()).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::start()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_literal() {
        let board = Board::from_fen("start").unwrap();
        assert_eq!(board, Board::start());
        assert_eq!(board.piece_count(), 32);
        assert_eq!(board.rows()[0][4].unwrap().code(), "bK");
        assert_eq!(board.rows()[7][3].unwrap().code(), "wQ");
    }

    #[test]
    fn test_full_fen_record() {
        let board =
            Board::from_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1").unwrap();
        assert_eq!(board.piece_count(), 32);
        assert!(board.rows()[4][4].unwrap().is_white());
        assert!(board.rows()[6][4].is_none());
    }

    #[test]
    fn test_invalid_fens() {
        assert_eq!(Board::from_fen("8/8/8"), Err(BoardError::RankCount(3)));
        assert_eq!(
            Board::from_fen("9/8/8/8/8/8/8/8 w - - 0 1"),
            Err(BoardError::RankWidth { rank: 8 })
        );
        assert_eq!(
            Board::from_fen("8/8/8/8/8/8/8/7x w - - 0 1"),
            Err(BoardError::InvalidPiece('x'))
        );
    }

    #[test]
    fn test_glyphs() {
        let king = Piece::from_fen_char('K').unwrap();
        let knight = Piece::from_fen_char('n').unwrap();
        assert_eq!(king.glyph(PieceTheme::Unicode), '♔');
        assert_eq!(knight.glyph(PieceTheme::Unicode), '♞');
        assert_eq!(knight.glyph(PieceTheme::Letters), 'n');
        assert!(Piece::from_fen_char('x').is_none());
    }

    #[test]
    fn test_piece_theme_from_str() {
        assert_eq!(PieceTheme::from_str("UNICODE").unwrap(), PieceTheme::Unicode);
        assert_eq!(PieceTheme::from_str("letters").unwrap(), PieceTheme::Letters);
        assert!(PieceTheme::from_str("png").is_err());
    }
}
