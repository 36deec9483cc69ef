mod utils;
use utils::{assert_close, frame, read_fixture, FrameBuilder};

use match_insights::timeline::{
    advantage_series, annotate_frames, axis_domain, derive_timeline, gradient_offset,
    AdvantageMode, AxisDomain, TeamRoster, TeamSide, TimelineError, TimelineFrame,
};
use serde::Deserialize;

#[derive(Deserialize)]
struct TimelineInput {
    roster: TeamRoster,
    frames: Vec<TimelineFrame>,
}

fn roster() -> TeamRoster {
    TeamRoster::new(vec![1, 2], vec![6, 7])
}

#[test]
fn aggregates_team_gold_and_advantage() {
    let frames = vec![frame(5, [100, 200], [50, 50])];

    let annotated = annotate_frames(&roster(), &frames).unwrap();
    let minute = &annotated[0];

    assert_eq!(minute.team100_gold, 300);
    assert_eq!(minute.team200_gold, 100);
    assert_eq!(minute.team100_adv, 200);
    assert_eq!(minute.team200_adv, -200);
    assert_close(minute.team100_perc_adv, 200.0);
    assert_close(minute.team200_perc_adv, -200.0);
}

#[test]
fn zero_gold_on_both_sides_yields_nan() {
    let frames = vec![FrameBuilder::at_minute(0)
        .no_gold(1)
        .no_gold(2)
        .no_gold(6)
        .no_gold(7)
        .build()];

    let annotated = annotate_frames(&roster(), &frames).unwrap();

    assert_eq!(annotated[0].team100_gold, 0);
    assert_eq!(annotated[0].team100_adv, 0);
    assert!(annotated[0].team100_perc_adv.is_nan());
    assert!(annotated[0].team200_perc_adv.is_nan());
}

#[test]
fn zero_gold_trailing_team_yields_infinity() {
    let frames = vec![
        FrameBuilder::at_minute(1).gold(1, 500).no_gold(6).build(),
        FrameBuilder::at_minute(1).no_gold(1).gold(6, 500).build(),
    ];

    let annotated = annotate_frames(&roster(), &frames).unwrap();

    assert_eq!(annotated[0].team100_perc_adv, f64::INFINITY);
    assert_eq!(annotated[0].team200_perc_adv, f64::NEG_INFINITY);
    assert_eq!(annotated[1].team100_perc_adv, f64::NEG_INFINITY);
    assert_eq!(annotated[1].team200_perc_adv, f64::INFINITY);
}

#[test]
fn gradient_offset_boundaries() {
    assert_eq!(gradient_offset(&[5.0, 10.0, 20.0]), 1.0);
    assert_eq!(gradient_offset(&[-5.0, -10.0]), 0.0);
    assert_eq!(gradient_offset(&[-10.0, 10.0]), 0.5);
}

#[test]
fn axis_domain_rounding() {
    assert_eq!(
        axis_domain(&[3_000.0, -7_000.0], AdvantageMode::Absolute),
        AxisDomain {
            min: -10_000.0,
            max: 10_000.0
        }
    );
    assert_eq!(
        axis_domain(&[-23.0, 12.0], AdvantageMode::Percentage),
        AxisDomain {
            min: -30.0,
            max: 30.0
        }
    );
}

#[test]
fn red_side_series_mirrors_blue_side() {
    let frames = vec![
        frame(1, [500, 500], [450, 500]),
        frame(2, [900, 1_000], [1_200, 1_000]),
    ];
    let annotated = annotate_frames(&roster(), &frames).unwrap();

    let blue = advantage_series(&annotated, TeamSide::Blue, AdvantageMode::Absolute);
    let red = advantage_series(&annotated, TeamSide::Red, AdvantageMode::Absolute);

    assert_eq!(blue, vec![50.0, -300.0]);
    assert_eq!(red, vec![-50.0, 300.0]);
}

#[test]
fn derives_fixture_timeline_for_each_perspective() {
    let input: TimelineInput =
        serde_json::from_str(&read_fixture("timeline_short.json")).expect("fixture should parse");

    let blue = derive_timeline(
        &input.roster,
        &input.frames,
        TeamSide::Blue,
        AdvantageMode::Absolute,
    )
    .unwrap();

    assert_eq!(blue.frames.len(), 4);
    assert!(blue.frames[0].team100_perc_adv.is_nan());
    assert_eq!(blue.frames[1].team100_perc_adv, 0.0);
    assert_close(blue.frames[2].team100_perc_adv, 600.0 / 1_900.0 * 100.0);
    assert_close(blue.frames[3].team200_perc_adv, 1_200.0 / 3_300.0 * 100.0);
    assert_close(blue.chart.gradient_offset, 1.0 / 3.0);
    assert_eq!(
        blue.chart.axis_domain,
        AxisDomain {
            min: -5_000.0,
            max: 5_000.0
        }
    );

    let red = derive_timeline(
        &input.roster,
        &input.frames,
        TeamSide::Red,
        AdvantageMode::Percentage,
    )
    .unwrap();

    assert_close(red.chart.gradient_offset, 2.0 / 3.0);
    assert_eq!(
        red.chart.axis_domain,
        AxisDomain {
            min: -40.0,
            max: 40.0
        }
    );
}

#[test]
fn frame_missing_participant_list_fails_whole_call() {
    let raw = r#"{
        "roster": { "team100": [1], "team200": [6] },
        "frames": [
            { "timestamp": 0, "participantFrames": [ { "participantId": 1, "totalGold": 500 } ] },
            { "timestamp": 60000 }
        ]
    }"#;
    let input: TimelineInput = serde_json::from_str(raw).unwrap();

    let result = derive_timeline(
        &input.roster,
        &input.frames,
        TeamSide::Blue,
        AdvantageMode::Absolute,
    );

    assert_eq!(
        result.unwrap_err(),
        TimelineError::MissingParticipantFrames { frame_index: 1 }
    );
}

#[test]
fn serialized_frame_keeps_input_fields_and_nulls_non_finite() {
    let frames = vec![FrameBuilder::at_minute(0).no_gold(1).no_gold(6).build()];
    let annotated = annotate_frames(&roster(), &frames).unwrap();

    let json = serde_json::to_value(&annotated[0]).unwrap();
    assert_eq!(json["timestamp"], 0);
    assert_eq!(json["participantFrames"][0]["participantId"], 1);
    assert_eq!(json["team100_gold"], 0);
    assert!(json["team100_perc_adv"].is_null());
}
