#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(String),
    TaskUpdated(String),
    TaskDeleted(String),
    TaskReopened(String),
    TaskCompleted(String),
    TaskNotFoundWithId(String),
    TaskCreateFailed(String),
    TaskUpdateFailed(String),
    TaskDeleteFailed(String),
    TasksEmpty,      // "Nenhuma tarefa criada. Comece agora!"
    TasksReadFailed, // "Erro ao ler tarefas"
    SubtaskNotFound(String, String),
    SubtaskToggled(String),
    PriorityLockedForCompleted(String),
    PriorityChanged(String, String),
    NoChangesDetected,
    ConfirmDeleteTask(String),
    DeleteAborted,

    // === FORUM MESSAGES ===
    DiscussionCreated,
    DiscussionUpdated(String),
    DiscussionDeleted(String),
    DiscussionsEmptyPage(u32),
    DiscussionCreateFailed(String),
    DiscussionUpdateFailed(String),
    DiscussionDeleteFailed(String),
    DiscussionsReadFailed(String),
    ConfirmDeleteDiscussion(String),

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleServer,
    ConfigModuleForum,
    ConfigServerMissing,
    ConfigForumMissing,
    PromptSelectModules,
    PromptServerApiUrl,
    PromptForumAuthorId,

    // === STATS MESSAGES ===
    StatsHeader(String),

    // === PROMPTS ===
    PromptTaskTitle,
    PromptTaskDescription,
    PromptTaskTerm,
    InvalidDate(String),
}
