use serde::{Deserialize, Serialize};

/// Multipliers of the ranking formula
///
/// Deaths, final deaths and damage received carry negative multipliers and
/// are subtracted in the formula, so they raise the score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScoreWeights {
    pub win: f64,
    pub loss: f64,
    pub kill: f64,
    pub death: f64,
    pub level: f64,
    pub final_kill: f64,
    pub final_death: f64,
    pub bed: f64,
    pub assist: f64,
    pub damage_dealt: f64,
    pub damage_received: f64,
    pub melee_accuracy: f64,

    /// SkyWars sub-score is divided by `playedGames * skywars_games`
    pub skywars_games: f64,

    /// BedWars sub-score is divided by `playedGames * bedwars_games`
    pub bedwars_games: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        ScoreWeights {
            win: 5.0,
            loss: 0.5,
            kill: 0.1,
            death: -0.02,
            level: 2.0,
            final_kill: 0.2,
            final_death: -0.05,
            bed: 1.0,
            assist: 0.05,
            damage_dealt: 0.001,
            damage_received: -0.0005,
            melee_accuracy: 10.0,
            skywars_games: 0.3,
            bedwars_games: 0.7,
        }
    }
}
