use tracing::{debug, instrument};

use super::{
    models::{AnnotatedFrame, ParticipantFrame, TeamRoster, TeamSide, TimelineFrame},
    TimelineError,
};

/// Annotates every frame with team gold totals and advantages.
///
/// Frames are not modified; each output entry wraps a copy of its input
/// frame. Participant frames without gold are skipped rather than counted as
/// zero, as are participants outside the roster.
#[instrument(skip_all, fields(frames = frames.len()))]
pub fn annotate_frames(
    roster: &TeamRoster,
    frames: &[TimelineFrame],
) -> Result<Vec<AnnotatedFrame>, TimelineError> {
    roster.validate()?;

    frames
        .iter()
        .enumerate()
        .map(|(frame_index, frame)| {
            let participants = frame
                .participant_frames
                .as_deref()
                .ok_or(TimelineError::MissingParticipantFrames { frame_index })?;
            Ok(annotate(roster, frame, participants))
        })
        .collect()
}

fn annotate(
    roster: &TeamRoster,
    frame: &TimelineFrame,
    participants: &[ParticipantFrame],
) -> AnnotatedFrame {
    let (team100_gold, team200_gold) = team_gold(roster, participants);
    let team100_adv = team100_gold - team200_gold;
    let (team100_perc_adv, team200_perc_adv) = percentage_advantage(team100_gold, team200_gold);

    if !team100_perc_adv.is_finite() {
        debug!(
            timestamp = frame.timestamp,
            team100_gold, team200_gold, "Percentage advantage is not finite"
        );
    }

    AnnotatedFrame {
        frame: frame.clone(),
        team100_gold,
        team200_gold,
        team100_adv,
        team200_adv: -team100_adv,
        team100_perc_adv,
        team200_perc_adv,
    }
}

fn team_gold(roster: &TeamRoster, participants: &[ParticipantFrame]) -> (i64, i64) {
    let mut team100_gold = 0;
    let mut team200_gold = 0;

    for participant in participants {
        let Some(gold) = participant.total_gold else {
            continue;
        };
        match roster.side_of(participant.participant_id) {
            Some(TeamSide::Blue) => team100_gold += gold,
            Some(TeamSide::Red) => team200_gold += gold,
            None => debug!(
                participant_id = participant.participant_id,
                "Skipping participant outside the roster"
            ),
        }
    }

    (team100_gold, team200_gold)
}

/// Signed advantages as a percentage of the trailing team's gold.
///
/// The division is unguarded: a trailing team with zero gold yields `NaN`
/// (both teams at zero) or an infinity.
pub fn percentage_advantage(team100_gold: i64, team200_gold: i64) -> (f64, f64) {
    let team100_adv = (team100_gold - team200_gold) as f64;
    if team100_adv >= 0.0 {
        let team100_perc = team100_adv / team200_gold as f64 * 100.0;
        (team100_perc, -team100_perc)
    } else {
        let team200_perc = -team100_adv / team100_gold as f64 * 100.0;
        (-team200_perc, team200_perc)
    }
}
