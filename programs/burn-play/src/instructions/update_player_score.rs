use anchor_lang::prelude::*;
use crate::{state::*, constants::*};

#[derive(Accounts)]
pub struct UpdatePlayerScore<'info> {
    #[account(mut)]
    pub player: Signer<'info>,

    #[account(
        init_if_needed,
        payer = player,
        space = ANCHOR_DISCRIMINATOR + PlayerScore::INIT_SPACE,
        seeds = [PLAYER_SCORE, player.key().as_ref()],
        bump,
    )]
    pub player_score: Account<'info, PlayerScore>,

    pub system_program: Program<'info, System>,
}

impl<'info> UpdatePlayerScore<'info> {
    pub fn update_player_score(
        &mut self,
        games_played: u32,
        games_won: u32,
        rating_delta: i32,
        bumps: &UpdatePlayerScoreBumps,
    ) -> Result<()> {
        if self.player_score.is_new() {
            self.player_score.open(self.player.key(), bumps.player_score);
        }

        let now = Clock::get()?.unix_timestamp;
        self.player_score
            .record_games(games_played, games_won, rating_delta, now)?;

        msg!(
            "Score updated: {} played, {} won, rating {}",
            self.player_score.games_played,
            self.player_score.games_won,
            self.player_score.current_rating
        );
        Ok(())
    }
}
