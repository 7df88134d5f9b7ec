//! Short algebraic-like notation and movetext assembly.
//!
//! Tokens are intentionally simple: no disambiguation by file/rank beyond
//! pawn captures, and the capture marker keys off the destination occupant,
//! so en passant renders as a plain pawn move. Castles render `O-O` /
//! `O-O-O`; a promotion suffix is appended only when the move carries the
//! promotion kind.

use crate::{
    move_description::{CastleSide, MoveDescription, MoveKind, MoveRecord},
    piece_class::PieceClass,
};

fn class_letter(class: PieceClass) -> char {
    match class {
        PieceClass::Pawn => 'P',
        PieceClass::Knight => 'N',
        PieceClass::Bishop => 'B',
        PieceClass::Rook => 'R',
        PieceClass::Queen => 'Q',
        PieceClass::King => 'K',
    }
}

/// Renders one move as a short algebraic-like token.
pub fn move_to_notation(chess_move: &MoveDescription) -> String {
    if let MoveKind::Castling(side) = chess_move.kind {
        return match side {
            CastleSide::KingSide => "O-O".to_string(),
            CastleSide::QueenSide => "O-O-O".to_string(),
        };
    }

    let destination_capture =
        chess_move.capture_status.is_some() && chess_move.kind != MoveKind::EnPassant;
    let is_pawn = chess_move.piece.class == PieceClass::Pawn;

    let piece_token = if is_pawn {
        if destination_capture {
            // Pawn captures lead with the origin file letter.
            char::from(b'a' + chess_move.origin.file as u8).to_string()
        } else {
            String::new()
        }
    } else {
        class_letter(chess_move.piece.class).to_string()
    };
    let capture_token = if destination_capture { "x" } else { "" };
    let promotion_token = match chess_move.kind {
        MoveKind::Promotion(class) => format!("={}", class_letter(class)),
        _ => String::new(),
    };

    format!(
        "{}{}{}{}",
        piece_token,
        capture_token,
        chess_move.destination.to_long_algebraic(),
        promotion_token
    )
}

/// Assembles the linear movetext: move number before each of Light's plies.
pub fn generate_movetext(history: &[MoveRecord]) -> String {
    let mut movetext = String::new();
    for (ply, record) in history.iter().enumerate() {
        if ply % 2 == 0 {
            movetext.push_str(&format!("{}. ", ply / 2 + 1));
        }
        movetext.push_str(&record.notation);
        movetext.push(' ');
    }
    movetext.trim_end().to_string()
}
