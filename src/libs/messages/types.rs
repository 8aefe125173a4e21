#[derive(Debug, Clone)]
pub enum Message {
    // === MENU MESSAGES ===
    MenuHeader,
    MenuAddProject,
    MenuListProjects,
    MenuSelectProject,
    NotWorkingWithProject,
    WorkingWithProject(String), // rendered project
    InvalidSelection(i32),
    SelectionFailed(String), // error
    MenuExited,

    // === PROJECT MESSAGES ===
    ProjectsHeader,
    ProjectListItem(String, String), // id, name
    ProjectCreated(String),          // rendered project

    // === PROMPTS ===
    PromptMenuSelection,
    PromptProjectName,
    PromptEstimatedHours,
    PromptActualHours,
    PromptDifficulty,
    PromptNotes,
    PromptSelectProjectId,
    PromptDatabasePath,

    // === INPUT ERRORS ===
    InvalidNumber(String),
    InvalidDecimal(String),
    ProjectIdRequired,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigFileNotFound,
    UsingDatabase(String), // path
}
