#[cfg(test)]
mod tests {
    use projects::db::db::Db;
    use projects::libs::service::ProjectService;
    use projects::libs::shell::Shell;
    use std::io::Cursor;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ShellTestContext {
        _temp_dir: TempDir,
        db: Db,
    }

    impl TestContext for ShellTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db = Db::with_path(temp_dir.path().join("projects.db"));
            ShellTestContext { _temp_dir: temp_dir, db }
        }
    }

    impl ShellTestContext {
        fn shell(&self, input: &str) -> Shell<Cursor<Vec<u8>>, Vec<u8>> {
            Shell::new(
                ProjectService::new(self.db.clone()),
                Cursor::new(input.as_bytes().to_vec()),
                Vec::new(),
            )
        }

        fn run(&self, input: &str) -> String {
            let mut shell = self.shell(input);
            shell.run().unwrap();
            String::from_utf8(shell.into_output()).unwrap()
        }

        fn project_count(&self) -> usize {
            ProjectService::new(self.db.clone()).fetch_all_projects().unwrap().len()
        }
    }

    #[test_context(ShellTestContext)]
    #[test]
    fn test_blank_selection_exits_once(ctx: &mut ShellTestContext) {
        let output = ctx.run("\n1\n");

        assert_eq!(output.matches("Menu exited.").count(), 1);
        assert_eq!(output.matches("Enter a menu selection: ").count(), 1);
        assert!(output.contains("You are not working with a project."));
        assert!(output.contains("  1) Add a project"));
        assert!(output.contains("  2) List projects"));
        assert!(output.contains("  3) Select a project"));
        assert!(!output.contains("Enter the project name"));
    }

    #[test_context(ShellTestContext)]
    #[test]
    fn test_end_of_input_exits(ctx: &mut ShellTestContext) {
        let output = ctx.run("2\n");

        assert!(output.contains("Projects:"));
        assert_eq!(output.matches("Menu exited.").count(), 1);
    }

    #[test_context(ShellTestContext)]
    #[test]
    fn test_add_project(ctx: &mut ShellTestContext) {
        let output = ctx.run("1\nBirdhouse\n12.5\n14\n3\nCedar boards\n\n");

        assert!(output.contains("Enter the project name: "));
        assert!(output.contains("Enter the estimated hours: "));
        assert!(output.contains("Enter the actual hours: "));
        assert!(output.contains("Enter the project difficulty (1-5): "));
        assert!(output.contains("Enter the project notes: "));
        assert!(output.contains("You have successfully created project:"));
        assert!(output.contains("ID=1"));
        assert!(output.contains("name=Birdhouse"));
        assert!(output.contains("estimatedHours=12.50"));
        assert!(output.contains("actualHours=14.00"));
        assert!(output.contains("notes=Cedar boards"));
        assert_eq!(ctx.project_count(), 1);
    }

    #[test_context(ShellTestContext)]
    #[test]
    fn test_invalid_decimal_reports_error_and_persists_nothing(ctx: &mut ShellTestContext) {
        let output = ctx.run("1\nBirdhouse\nabc\n\n");

        assert!(output.contains("Error: abc is not a valid decimal number. Try again."));
        assert!(!output.contains("Enter the actual hours"));
        assert_eq!(output.matches("Menu exited.").count(), 1);
        assert_eq!(ctx.project_count(), 0);
    }

    #[test_context(ShellTestContext)]
    #[test]
    fn test_hours_beyond_column_precision_rejected(ctx: &mut ShellTestContext) {
        let output = ctx.run("1\nBirdhouse\n100000\n1\nBirdhouse\n99999.99\n\n\n\n\n");

        assert!(output.contains("Error: 100000 is not a valid decimal number. Try again."));
        assert!(output.contains("estimatedHours=99999.99"));
        assert_eq!(ctx.project_count(), 1);
    }

    #[test_context(ShellTestContext)]
    #[test]
    fn test_select_project_with_large_id(ctx: &mut ShellTestContext) {
        let conn = ctx.db.connect().unwrap();
        conn.execute("INSERT INTO project (project_id, project_name) VALUES (3000000000, 'Imported')", [])
            .unwrap();
        drop(conn);

        let mut shell = ctx.shell("3\n3000000000\n\n");
        shell.run().unwrap();

        let selected = shell.current_project().unwrap();
        assert_eq!(selected.project_id, Some(3_000_000_000));

        let output = String::from_utf8(shell.into_output()).unwrap();
        assert!(output.contains("  3000000000: Imported"));
    }

    #[test_context(ShellTestContext)]
    #[test]
    fn test_invalid_integer_reports_error(ctx: &mut ShellTestContext) {
        let output = ctx.run("1\nBirdhouse\n1\n2\nhard\n\n");

        assert!(output.contains("Error: hard is not a valid number. Try again."));
        assert_eq!(ctx.project_count(), 0);
    }

    #[test_context(ShellTestContext)]
    #[test]
    fn test_non_numeric_menu_selection(ctx: &mut ShellTestContext) {
        let output = ctx.run("abc\n\n");

        assert!(output.contains("Error: abc is not a valid number. Try again."));
        assert_eq!(output.matches("Enter a menu selection: ").count(), 2);
    }

    #[test_context(ShellTestContext)]
    #[test]
    fn test_unknown_menu_selection(ctx: &mut ShellTestContext) {
        let output = ctx.run("7\n\n");

        assert!(output.contains("7 is not a valid selection. Try again."));
        assert!(!output.contains("Error:"));
        assert_eq!(output.matches("Enter a menu selection: ").count(), 2);
    }

    #[test_context(ShellTestContext)]
    #[test]
    fn test_blank_name_fails_insert_and_loop_continues(ctx: &mut ShellTestContext) {
        let output = ctx.run("1\n\n\n\n\n\n2\n\n");

        assert!(output.contains("Error: "));
        assert!(output.contains("Projects:"));
        assert_eq!(output.matches("Menu exited.").count(), 1);
        assert_eq!(ctx.project_count(), 0);
    }

    #[test_context(ShellTestContext)]
    #[test]
    fn test_list_projects_in_name_order(ctx: &mut ShellTestContext) {
        let output = ctx.run("1\nZZZ\n\n\n\n\n1\nAAA\n\n\n\n\n2\n\n");

        let listing = &output[output.rfind("Projects:").unwrap()..];
        let aaa = listing.find("  2: AAA").unwrap();
        let zzz = listing.find("  1: ZZZ").unwrap();
        assert!(aaa < zzz);
    }

    #[test_context(ShellTestContext)]
    #[test]
    fn test_select_project_sets_session(ctx: &mut ShellTestContext) {
        let mut shell = ctx.shell("1\nBookshelf\n8\n\n2\n\n3\n1\n\n");
        shell.run().unwrap();

        let selected = shell.current_project().unwrap();
        assert_eq!(selected.project_id, Some(1));
        assert_eq!(selected.project_name.as_deref(), Some("Bookshelf"));

        let output = String::from_utf8(shell.into_output()).unwrap();
        assert!(output.contains("Enter a project ID to select a project: "));
        assert!(output.contains("You are working with project: "));
    }

    #[test_context(ShellTestContext)]
    #[test]
    fn test_select_missing_project_clears_session(ctx: &mut ShellTestContext) {
        let mut shell = ctx.shell("1\nBookshelf\n\n\n\n\n3\n1\n3\n42\n\n");
        shell.run().unwrap();

        assert!(shell.current_project().is_none());

        let output = String::from_utf8(shell.into_output()).unwrap();
        assert!(output.contains("Error: Project with ID=42 does not exist. Try again."));
        let after_error = &output[output.find("ID=42").unwrap()..];
        assert!(after_error.contains("You are not working with a project."));
    }

    #[test_context(ShellTestContext)]
    #[test]
    fn test_select_with_blank_id(ctx: &mut ShellTestContext) {
        let mut shell = ctx.shell("3\n\n\n");
        shell.run().unwrap();

        assert!(shell.current_project().is_none());
        let output = String::from_utf8(shell.into_output()).unwrap();
        assert!(output.contains("Error: A project ID is required. Try again."));
    }
}
