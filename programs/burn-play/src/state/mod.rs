pub mod game_config;
pub mod vault;
pub mod player;
pub mod player_score;
pub mod member_set;
pub mod governance;
pub mod recovery;

pub use game_config::*;
pub use vault::*;
pub use player::*;
pub use player_score::*;
pub use member_set::*;
pub use governance::*;
pub use recovery::*;

#[cfg(test)]
pub(crate) fn assert_error<T: std::fmt::Debug>(
    result: anchor_lang::Result<T>,
    expected: crate::errors::BurnPlayError,
) {
    use anchor_lang::error::{Error, ERROR_CODE_OFFSET};

    match result {
        Err(Error::AnchorError(e)) => {
            assert_eq!(e.error_code_number, expected as u32 + ERROR_CODE_OFFSET)
        }
        other => panic!("expected {:?}, got {:?}", expected, other),
    }
}
