#[cfg(feature = "std")]
#[cfg(test)]
mod cli_tests {
    use vault_solver::player_cli::{coord_to_string, parse_coord, CliSession, Flow};
    use vault_solver::{SelectOutcome, Solver};

    fn run(cli: &mut CliSession, lines: &[&str]) -> String {
        let mut out = Vec::new();
        for line in lines {
            cli.handle(line, &mut out).unwrap();
        }
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_coordinates() {
        assert_eq!(parse_coord("A1"), Some((0, 0)));
        assert_eq!(parse_coord("c12"), Some((11, 2)));
        assert_eq!(parse_coord("A0"), None);
        assert_eq!(parse_coord("7"), None);
        assert_eq!(parse_coord("1A"), None);
        assert_eq!(coord_to_string(4, 1), "B5");
    }

    #[test]
    fn test_setup_commands() {
        let mut cli = CliSession::default();
        let text = run(
            &mut cli,
            &["size 5 5", "add blue v", "add purple", "toggle #1", "remove 0", "pieces"],
        );
        assert!(text.contains("Board 5x5"));
        assert!(text.contains("Added Blue Rod #0"));
        assert!(text.contains("Added Purple Diamond #1"));
        assert!(text.contains("Orientation H"));
        assert!(text.contains("Removed Blue Rod #0"));
        assert!(text.contains("#1 Purple Diamond H"));
        assert!(!cli.solver().is_playing());
    }

    #[test]
    fn test_rejected_commands_are_reported() {
        let mut cli = CliSession::default();
        let text = run(&mut cli, &["start", "size 0 3", "add teal", "miss"]);
        assert_eq!(text.matches("Error:").count(), 4);
        assert!(!cli.solver().is_playing());
    }

    #[test]
    fn test_play_through_commands() {
        let mut cli = CliSession::default();
        run(&mut cli, &["size 4 4", "add yellow", "start"]);
        assert!(cli.solver().is_playing());

        let text = run(&mut cli, &["A1", "hit yellow left"]);
        assert!(text.contains("Selected A1"));
        assert!(text.contains("0 / 1 units found, 1 attempts"));

        let text = run(&mut cli, &["B1", "hit yellow right", "status"]);
        assert!(text.contains("1 / 1 units found, 2 attempts"));
        assert!(text.contains("All units found in 2 attempts!"));

        let text = run(&mut cli, &["A1"]);
        assert!(text.contains("A1 is already revealed"));
    }

    #[test]
    fn test_json_report() {
        let mut cli = CliSession::default();
        run(&mut cli, &["size 1 4", "add yellow", "start", "B1", "miss"]);
        let text = run(&mut cli, &["json"]);
        let v: serde_json::Value = serde_json::from_str(text.trim()).unwrap();
        assert_eq!(v["progress"]["attempts"], 1);
        assert_eq!(v["progress"]["complete"], false);
        assert_eq!(v["scores"][0], serde_json::json!([0, 0, 1, 1]));
        assert_eq!(v["suggestion"], serde_json::json!([0, 2]));
    }

    #[test]
    fn test_unoffered_label_warns() {
        let mut cli = CliSession::default();
        run(&mut cli, &["add yellow", "start", "A1"]);
        let text = run(&mut cli, &["hit yellow top"]);
        assert!(text.contains("Warning: 'top' is not a label of any yellow piece"));
        let session = cli.solver().session().unwrap();
        assert_eq!(session.attempts(), 1);
    }

    #[test]
    fn test_reset_and_quit() {
        let mut cli = CliSession::new(Solver::new());
        run(&mut cli, &["size 7 3", "add green", "start"]);
        let text = run(&mut cli, &["reset", "pieces"]);
        assert!(text.contains("Back to setup"));
        assert!(text.contains("Board 7x3"));

        let mut out = Vec::new();
        assert_eq!(cli.handle("quit", &mut out).unwrap(), Flow::Quit);
        assert_eq!(cli.handle("   ", &mut out).unwrap(), Flow::Continue);
    }

    #[test]
    fn test_run_reads_until_quit() {
        let mut cli = CliSession::default();
        let input = "add orange\nstart\nB2\nquit\nA1\n";
        let mut out = Vec::new();
        cli.run(input.as_bytes(), &mut out).unwrap();
        let session = cli.solver().session().unwrap();
        assert_eq!(session.pending(), Some((1, 1)));
        // the line after quit is never read
        let mut probe = session.clone();
        assert_eq!(probe.select_cell(0, 0), Ok(SelectOutcome::Replaced { row: 1, col: 1 }));
    }
    #[test]
    fn test_cancel_clears_selection() {
        let mut cli = CliSession::default();
        run(&mut cli, &["size 2 4", "add yellow", "start", "A2"]);
        let text = run(&mut cli, &["cancel", "cancel", "miss"]);
        assert!(text.contains("Cancelled A2"));
        assert!(text.contains("Nothing selected"));
        assert!(text.contains("Error: No cell is selected"));
        let session = cli.solver().session().unwrap();
        assert_eq!(session.pending(), None);
        assert_eq!(session.attempts(), 0);
    }

    #[test]
    fn test_targets_lists_every_piece() {
        let mut cli = CliSession::default();
        run(
            &mut cli,
            &["size 4 4", "add yellow", "add blue v", "start", "A1", "hit yellow left", "B1", "hit yellow right"],
        );
        let text = run(&mut cli, &["targets"]);
        assert!(text.contains("#0 Yellow Diamond H: found at A1"));
        assert!(text.contains("#1 Blue Rod V: not found"));
    }

    #[test]
    fn test_repeated_hit_details_are_rejected() {
        let mut cli = CliSession::default();
        run(&mut cli, &["add yellow", "add blue", "start", "A1"]);
        let text = run(&mut cli, &["hit yellow blue", "hit left right"]);
        assert!(text.contains("Error: colour given twice"));
        assert!(text.contains("Error: edge label given twice"));
        let session = cli.solver().session().unwrap();
        assert_eq!(session.pending(), Some((0, 0)));
        assert_eq!(session.attempts(), 0);
    }
}
