#[cfg(feature = "std")]
#[cfg(test)]
mod console_tests {
    use toy_robot::{
        CommandKind, Console, ConsoleOptions, Event, RecordingSink, Table, ToyRobot,
    };

    fn session(input: &str, options: ConsoleOptions) -> (String, Console<RecordingSink>) {
        let robot = ToyRobot::with_sink(Table::default(), RecordingSink::new());
        let mut console = Console::new(robot, options);
        let mut out = Vec::new();
        console.run(input.as_bytes(), &mut out).unwrap();
        (String::from_utf8(out).unwrap(), console)
    }

    #[test]
    fn test_script_reports() {
        let (out, console) = session(
            "PLACE 1,2,EAST\nMOVE\nMOVE\nLEFT\nMOVE\nREPORT\n",
            ConsoleOptions::default(),
        );
        assert_eq!(out, "Output: 3,3,NORTH\n");
        let summary = console.summary();
        assert_eq!(summary.commands, 6);
        assert_eq!(summary.reports, 1);
        assert!(!summary.exited);
    }

    #[test]
    fn test_lowercase_and_blank_lines() {
        let (out, _) = session("\n  place 0,0,north \n\nleft\nreport\n", ConsoleOptions::default());
        assert_eq!(out, "Output: 0,0,WEST\n");
    }

    #[test]
    fn test_exit_stops_reading() {
        let (out, console) = session(
            "PLACE 0,0,NORTH\nexit\nREPORT\n",
            ConsoleOptions::default(),
        );
        assert_eq!(out, "");
        assert!(console.summary().exited);
        assert_eq!(console.summary().commands, 1);
    }

    #[test]
    fn test_unknown_command_continues() {
        let (out, console) = session("JUMP\nPLACE 2,2,SOUTH\nREPORT\n", ConsoleOptions::default());
        assert_eq!(out, "Output: 2,2,SOUTH\n");
        assert_eq!(console.summary().unknown, 1);
        let robot = console.into_robot();
        let events = robot.sink().events();
        assert_eq!(events[0], Event::UnknownCommand("JUMP".to_string()));
        assert_eq!(events[0].to_string(), "Invalid command: JUMP");
    }

    #[test]
    fn test_rejected_place_is_surfaced() {
        let (out, console) = session("PLACE 6,6,NORTH\nMOVE\nREPORT\n", ConsoleOptions::default());
        assert_eq!(
            out,
            "x or y value out of bounds. Expected x: 0 to 4, y: 0 to 4.\n"
        );
        assert_eq!(console.summary().rejected, 1);
        let robot = console.into_robot();
        assert_eq!(robot.pose(), None);
        assert_eq!(
            robot.sink().last(),
            Some(&Event::NotPlaced(CommandKind::Report))
        );
    }

    #[test]
    fn test_grid_view_after_report() {
        let options = ConsoleOptions {
            show_grid: true,
            ..ConsoleOptions::default()
        };
        let (out, _) = session("PLACE 0,4,EAST\nREPORT\n", options);
        let mut lines = out.lines();
        assert_eq!(lines.next(), Some("Output: 0,4,EAST"));
        assert_eq!(lines.next(), Some("[>] [ ] [ ] [ ] [ ]"));
        assert_eq!(lines.count(), 4);
    }

    #[test]
    fn test_prompt_and_help() {
        let options = ConsoleOptions {
            prompt: true,
            ..ConsoleOptions::default()
        };
        let (out, console) = session("HELP\nEXIT\n", options);
        assert!(out.starts_with("> Commands:"));
        assert!(out.contains("X: 0 to 4, Y: 0 to 4"));
        assert_eq!(console.summary().commands, 0);
        assert_eq!(console.robot().pose(), None);
    }
}
