use proptest::prelude::*;
use toy_robot::{Command, Facing, RobotState, Table, ToyRobot};

fn facing() -> impl Strategy<Value = Facing> {
    prop::sample::select(Facing::ALL.to_vec())
}

fn line(width: usize, height: usize) -> impl Strategy<Value = String> {
    prop_oneof![
        (0..width + 2, 0..height + 2, facing())
            .prop_map(|(x, y, f)| format!("PLACE {},{},{}", x, y, f)),
        Just("MOVE".to_string()),
        Just("LEFT".to_string()),
        Just("RIGHT".to_string()),
        Just("REPORT".to_string()),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn place_then_report(x in 0..5usize, y in 0..5usize, f in facing()) {
        let mut robot = ToyRobot::new();
        robot.place(&format!("PLACE {},{},{}", x, y, f)).unwrap();
        prop_assert_eq!(robot.report(), Some(format!("Output: {},{},{}", x, y, f)));
    }

    #[test]
    fn four_turns_restore_facing(x in 0..5usize, y in 0..5usize, f in facing(), left in any::<bool>()) {
        let mut robot = ToyRobot::new();
        let placed = robot.place(&format!("PLACE {},{},{}", x, y, f)).unwrap();
        for _ in 0..4 {
            if left { robot.left(); } else { robot.right(); }
        }
        prop_assert_eq!(robot.pose(), Some(&placed));
    }

    #[test]
    fn unplaced_robot_ignores_everything_but_place(
        cmds in prop::collection::vec(prop::sample::select(vec!["MOVE", "LEFT", "RIGHT", "REPORT"]), 0..32)
    ) {
        let mut robot = ToyRobot::new();
        for c in cmds {
            robot.execute(Command::parse(c).unwrap());
            prop_assert_eq!(robot.state(), &RobotState::Unplaced);
        }
        prop_assert_eq!(robot.report(), None);
    }

    #[test]
    fn robot_never_leaves_table(
        (w, h, lines) in (1..8usize, 1..8usize)
            .prop_flat_map(|(w, h)| (Just(w), Just(h), prop::collection::vec(line(w, h), 0..64)))
    ) {
        let table = Table::new(w, h).unwrap();
        let mut robot = ToyRobot::with_sink(table, toy_robot::NullSink);
        for l in &lines {
            robot.execute(Command::parse(l).unwrap());
            if let Some(pose) = robot.pose() {
                prop_assert!(pose.x < w && pose.y < h, "{:?} escaped after {}", pose, l);
            }
        }
    }
}
