//! Property-based tests for the precedent radar list.
//!
//! Random operation sequences must keep radar ids unique, keep the list
//! cursor in range and never leave a case feed pointing at a deleted radar.

use chrono::{TimeZone, Utc};
use jubee::model::fixtures::sample_radars;
use jubee::tui::app_states::{PrecedentRadarWorkflow, RadarPhase};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Create { millis_offset: i64, proposition: String },
    Duplicate(usize),
    Delete(usize),
    Toggle(usize),
    Open(usize),
    Back,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0i64..3, "[a-z ]{0,12}").prop_map(|(millis_offset, proposition)| Op::Create {
            millis_offset,
            proposition
        }),
        (0usize..8).prop_map(Op::Duplicate),
        (0usize..8).prop_map(Op::Delete),
        (0usize..8).prop_map(Op::Toggle),
        (0usize..8).prop_map(Op::Open),
        Just(Op::Back),
    ]
}

fn id_at(wf: &PrecedentRadarWorkflow, index: usize) -> Option<String> {
    wf.radars().get(index).map(|r| r.id.clone())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn radar_ops_preserve_invariants(ops in prop::collection::vec(op_strategy(), 0..60)) {
        let base = Utc.with_ymd_and_hms(2024, 7, 1, 12, 0, 0).unwrap();
        let mut wf = PrecedentRadarWorkflow::new(sample_radars());

        for op in ops {
            let before = wf.radars().len();
            match op {
                Op::Create { millis_offset, proposition } => {
                    wf.back();
                    wf.start_setup().expect("dashboard accepts setup");
                    if let Some(draft) = wf.draft_mut() {
                        draft.proposition = proposition.clone();
                    }
                    wf.set_jurisdictions(vec!["Supreme Court".to_string()])
                        .expect("setup accepts courts");
                    let now = base + chrono::Duration::milliseconds(millis_offset);
                    if wf.complete_setup().is_ok() {
                        wf.confirm_at(now).expect("preview confirms");
                        prop_assert_eq!(wf.radars().len(), before + 1);
                    } else {
                        prop_assert!(proposition.trim().is_empty());
                        wf.cancel();
                    }
                }
                Op::Duplicate(i) => {
                    if let Some(id) = id_at(&wf, i) {
                        let new_id = wf
                            .duplicate_at(&id, base)
                            .expect("existing radar duplicates");
                        prop_assert_eq!(wf.radars().len(), before + 1);
                        prop_assert_eq!(&wf.radars()[i + 1].id, &new_id);
                    }
                }
                Op::Delete(i) => {
                    if let Some(id) = id_at(&wf, i) {
                        let mut expected: Vec<String> =
                            wf.radars().iter().map(|r| r.id.clone()).collect();
                        expected.remove(i);
                        wf.delete(&id).expect("existing radar deletes");
                        prop_assert_eq!(wf.radars().len(), before - 1);
                        prop_assert!(wf.radar(&id).is_none());
                        let remaining: Vec<String> =
                            wf.radars().iter().map(|r| r.id.clone()).collect();
                        prop_assert_eq!(remaining, expected);
                    }
                }
                Op::Toggle(i) => {
                    if let Some(id) = id_at(&wf, i) {
                        wf.toggle_status(&id).expect("existing radar toggles");
                    }
                }
                Op::Open(i) => {
                    if let Some(id) = id_at(&wf, i) {
                        wf.back();
                        wf.select(&id).expect("dashboard opens radar");
                    }
                }
                Op::Back => wf.back(),
            }

            let mut ids: Vec<&str> = wf.radars().iter().map(|r| r.id.as_str()).collect();
            ids.sort_unstable();
            ids.dedup();
            prop_assert_eq!(ids.len(), wf.radars().len());

            if let RadarPhase::CaseFeed { radar_id } = wf.phase() {
                prop_assert!(wf.radar(radar_id).is_some());
            }
        }
    }
}
