#![allow(dead_code)] // Test utilities may not all be used in every test

use match_insights::{
    impact::{ParticipantId, PlayerStats, TeamId},
    ladder::RankedSnapshot,
    timeline::{ParticipantFrame, TimelineFrame},
};

// ============================================================================
// Player Stat Builders
// ============================================================================

pub struct PlayerBuilder {
    stats: PlayerStats,
}

impl PlayerBuilder {
    /// A participant with every stat present and zero.
    pub fn new(participant_id: ParticipantId, team_id: TeamId) -> Self {
        Self {
            stats: PlayerStats {
                participant_id,
                team_id,
                damage_to_champions: Some(0.0),
                damage_to_objectives: Some(0.0),
                damage_to_turrets: Some(0.0),
                kills: Some(0.0),
                assists: Some(0.0),
                deaths: Some(0.0),
                vision_score: Some(0.0),
                total_heal: Some(0.0),
                crowd_control_time: Some(0.0),
            },
        }
    }

    /// A typical mid-game stat line, scaled.
    pub fn typical(participant_id: ParticipantId, team_id: TeamId, scale: f64) -> Self {
        Self::new(participant_id, team_id)
            .damage(18_000.0 * scale, 6_000.0 * scale, 2_500.0 * scale)
            .kda(5.0 * scale, 3.0 * scale, 7.0 * scale)
            .vision(25.0 * scale)
            .heal(2_000.0 * scale)
            .crowd_control(15.0 * scale)
    }

    pub fn damage(mut self, champions: f64, objectives: f64, turrets: f64) -> Self {
        self.stats.damage_to_champions = Some(champions);
        self.stats.damage_to_objectives = Some(objectives);
        self.stats.damage_to_turrets = Some(turrets);
        self
    }

    pub fn kda(mut self, kills: f64, deaths: f64, assists: f64) -> Self {
        self.stats.kills = Some(kills);
        self.stats.deaths = Some(deaths);
        self.stats.assists = Some(assists);
        self
    }

    pub fn vision(mut self, vision_score: f64) -> Self {
        self.stats.vision_score = Some(vision_score);
        self
    }

    pub fn heal(mut self, total_heal: f64) -> Self {
        self.stats.total_heal = Some(total_heal);
        self
    }

    pub fn crowd_control(mut self, seconds: f64) -> Self {
        self.stats.crowd_control_time = Some(seconds);
        self
    }

    pub fn without_deaths(mut self) -> Self {
        self.stats.deaths = None;
        self
    }

    pub fn build(self) -> PlayerStats {
        self.stats
    }
}

// ============================================================================
// Ladder Builders
// ============================================================================

/// Snapshot from rank strings such as `"GOLD II 45"` or `"MASTER 250"`.
pub fn snapshot(peak: &str, trough: &str) -> RankedSnapshot {
    RankedSnapshot {
        recorded_at: None,
        peak_rank: peak.parse().expect("peak rank should parse"),
        trough_rank: trough.parse().expect("trough rank should parse"),
    }
}

// ============================================================================
// Timeline Builders
// ============================================================================

pub struct FrameBuilder {
    timestamp: u64,
    participants: Vec<ParticipantFrame>,
}

impl FrameBuilder {
    pub fn at_minute(minute: u64) -> Self {
        Self {
            timestamp: minute * 60_000,
            participants: vec![],
        }
    }

    pub fn gold(mut self, participant_id: ParticipantId, total_gold: i64) -> Self {
        self.participants.push(ParticipantFrame {
            participant_id,
            total_gold: Some(total_gold),
        });
        self
    }

    pub fn no_gold(mut self, participant_id: ParticipantId) -> Self {
        self.participants.push(ParticipantFrame {
            participant_id,
            total_gold: None,
        });
        self
    }

    pub fn build(self) -> TimelineFrame {
        TimelineFrame {
            timestamp: self.timestamp,
            participant_frames: Some(self.participants),
        }
    }
}

/// Frame for the 1,2 vs 6,7 roster with the given golds.
pub fn frame(minute: u64, team100: [i64; 2], team200: [i64; 2]) -> TimelineFrame {
    FrameBuilder::at_minute(minute)
        .gold(1, team100[0])
        .gold(2, team100[1])
        .gold(6, team200[0])
        .gold(7, team200[1])
        .build()
}
