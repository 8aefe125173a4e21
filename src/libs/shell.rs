//! Line-oriented interactive menu.
//!
//! Each prompt writes `"<prompt>: "` and reads one line. A blank line at the
//! menu prompt (or the end of input anywhere) ends the loop. Every other
//! failure raised while handling a selection is reported once as
//! `Error: <details> Try again.` and the menu is shown again.
//!
//! The shell owns the session: the project picked with selection `3` stays
//! selected until another selection attempt replaces or clears it.

use super::error::ProjectsError;
use super::hours::Hours;
use super::messages::Message;
use super::project::Project;
use super::service::ProjectService;
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use tracing::debug;

const EXIT_SELECTION: i32 = -1;

const OPERATIONS: [Message; 3] = [Message::MenuAddProject, Message::MenuListProjects, Message::MenuSelectProject];

/// Why a selection stopped before completing normally.
#[derive(Debug)]
enum Interrupt {
    Failed(ProjectsError),
    EndOfInput,
    Io(io::Error),
}

impl From<ProjectsError> for Interrupt {
    fn from(value: ProjectsError) -> Self {
        Self::Failed(value)
    }
}

impl From<io::Error> for Interrupt {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

type Outcome<T> = Result<T, Interrupt>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Done,
}

/// Menu loop bound to a project service and a pair of console streams.
pub struct Shell<R, W> {
    service: ProjectService,
    input: R,
    output: W,
    current_project: Option<Project>,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Creates a shell with no project selected.
    ///
    /// # Arguments
    ///
    /// * `service` - Project use-cases backing every menu selection
    /// * `input` - Line source for selections and prompts
    /// * `output` - Destination for menus, prompts and results
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use projects::db::db::Db;
    /// use projects::libs::service::ProjectService;
    /// use projects::libs::shell::Shell;
    ///
    /// let service = ProjectService::new(Db::with_path("projects.db"));
    /// let mut shell = Shell::new(service, std::io::stdin().lock(), std::io::stdout());
    /// shell.run()?;
    /// # Ok::<(), std::io::Error>(())
    /// ```
    pub fn new(service: ProjectService, input: R, output: W) -> Self {
        Self {
            service,
            input,
            output,
            current_project: None,
        }
    }

    /// The project picked by the last successful selection, if any.
    pub fn current_project(&self) -> Option<&Project> {
        self.current_project.as_ref()
    }

    /// Consumes the shell and hands back its output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs the menu loop until the exit selection. Only console I/O failures escape.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            match self.process_selection() {
                Ok(Flow::Continue) => {}
                Ok(Flow::Done) => return Ok(()),
                Err(Interrupt::EndOfInput) => {
                    self.exit_menu()?;
                    return Ok(());
                }
                Err(Interrupt::Failed(err)) => {
                    debug!(error = ?err, "Selection failed");
                    writeln!(self.output, "\n{}", Message::SelectionFailed(err.to_string()))?;
                }
                Err(Interrupt::Io(err)) => return Err(err),
            }
        }
    }

    fn process_selection(&mut self) -> Outcome<Flow> {
        match self.get_user_selection()? {
            EXIT_SELECTION => {
                self.exit_menu()?;
                return Ok(Flow::Done);
            }
            1 => self.create_project()?,
            2 => self.list_projects()?,
            3 => self.select_project()?,
            selection => writeln!(self.output, "\n{}\n", Message::InvalidSelection(selection))?,
        }
        Ok(Flow::Continue)
    }

    fn exit_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "{}", Message::MenuExited)
    }

    fn get_user_selection(&mut self) -> Outcome<i32> {
        self.print_operations()?;
        let selection = self.get_int_input(Message::PromptMenuSelection)?;
        Ok(selection.unwrap_or(EXIT_SELECTION))
    }

    fn print_operations(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n{}", Message::MenuHeader)?;
        for operation in &OPERATIONS {
            writeln!(self.output, "  {}", operation)?;
        }

        match &self.current_project {
            Some(project) => writeln!(self.output, "\n{}", Message::WorkingWithProject(project.to_string())),
            None => writeln!(self.output, "\n{}", Message::NotWorkingWithProject),
        }
    }

    fn create_project(&mut self) -> Outcome<()> {
        let project_name = self.get_string_input(Message::PromptProjectName)?;
        let estimated_hours = self.get_decimal_input(Message::PromptEstimatedHours)?;
        let actual_hours = self.get_decimal_input(Message::PromptActualHours)?;
        let difficulty = self.get_int_input(Message::PromptDifficulty)?;
        let notes = self.get_string_input(Message::PromptNotes)?;

        let project = Project::new(project_name, estimated_hours, actual_hours, difficulty, notes);
        let db_project = self.service.add_project(project)?;

        writeln!(self.output, "{}", Message::ProjectCreated(db_project.to_string()))?;
        Ok(())
    }

    fn list_projects(&mut self) -> Outcome<()> {
        let projects = self.service.fetch_all_projects()?;

        writeln!(self.output, "\n{}", Message::ProjectsHeader)?;
        for project in &projects {
            let id = project.project_id.map_or_else(|| "null".to_string(), |id| id.to_string());
            let name = project.project_name.clone().unwrap_or_else(|| "null".to_string());
            writeln!(self.output, "{}", Message::ProjectListItem(id, name))?;
        }
        Ok(())
    }

    fn select_project(&mut self) -> Outcome<()> {
        self.list_projects()?;
        let project_id: Option<i64> = self.get_int_input(Message::PromptSelectProjectId)?;

        self.current_project = None;

        let project_id = project_id.ok_or_else(|| ProjectsError::InvalidInput(Message::ProjectIdRequired.to_string()))?;
        self.current_project = Some(self.service.fetch_project_by_id(project_id)?);
        Ok(())
    }

    fn get_decimal_input(&mut self, prompt: Message) -> Outcome<Option<Hours>> {
        let Some(input) = self.get_string_input(prompt)? else {
            return Ok(None);
        };

        match input.parse::<Hours>() {
            Ok(hours) => Ok(Some(hours)),
            Err(err) => {
                debug!(input = %input, reason = %err, "Rejected decimal input");
                Err(ProjectsError::InvalidInput(Message::InvalidDecimal(input).to_string()).into())
            }
        }
    }

    fn get_int_input<T: FromStr>(&mut self, prompt: Message) -> Outcome<Option<T>> {
        let Some(input) = self.get_string_input(prompt)? else {
            return Ok(None);
        };

        match input.parse::<T>() {
            Ok(value) => Ok(Some(value)),
            Err(_) => Err(ProjectsError::InvalidInput(Message::InvalidNumber(input).to_string()).into()),
        }
    }

    /// Blank input is `None`; anything else is returned trimmed.
    fn get_string_input(&mut self, prompt: Message) -> Outcome<Option<String>> {
        write!(self.output, "{}: ", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(Interrupt::EndOfInput);
        }

        let input = line.trim();
        Ok(if input.is_empty() { None } else { Some(input.to_string()) })
    }
}
