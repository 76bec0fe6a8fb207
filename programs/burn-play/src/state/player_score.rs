use anchor_lang::prelude::*;
use crate::{constants::*, errors::*};

// Seeds: ["player_score", player]
#[account]
#[derive(InitSpace)]
pub struct PlayerScore {
    pub player: Pubkey,
    pub games_played: u32,
    pub games_won: u32,
    pub current_rating: u32,
    pub highest_rating: u32,
    pub last_game_time: i64,
    pub total_prizes_earned: u64,
    pub bump: u8,
}

impl PlayerScore {
    pub fn is_new(&self) -> bool {
        self.player == Pubkey::default()
    }

    pub fn open(&mut self, player: Pubkey, bump: u8) {
        self.player = player;
        self.current_rating = BASELINE_RATING;
        self.highest_rating = BASELINE_RATING;
        self.bump = bump;
    }

    pub fn record_games(
        &mut self,
        games_played: u32,
        games_won: u32,
        rating_delta: i32,
        now: i64,
    ) -> Result<()> {
        require!(games_won <= games_played, BurnPlayError::InvalidParameter);

        self.games_played = self
            .games_played
            .checked_add(games_played)
            .ok_or(BurnPlayError::ArithmeticOverflow)?;
        self.games_won = self
            .games_won
            .checked_add(games_won)
            .ok_or(BurnPlayError::ArithmeticOverflow)?;

        let rating = (self.current_rating as i64 + rating_delta as i64)
            .clamp(MIN_RATING, u32::MAX as i64);
        self.current_rating = rating as u32;
        self.highest_rating = self.highest_rating.max(self.current_rating);
        self.last_game_time = now;
        Ok(())
    }

    pub fn record_prize(&mut self, amount: u64) -> Result<()> {
        self.total_prizes_earned = self
            .total_prizes_earned
            .checked_add(amount)
            .ok_or(BurnPlayError::ArithmeticOverflow)?;
        Ok(())
    }
}
