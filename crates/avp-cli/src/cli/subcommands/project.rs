use clap::Subcommand;

/// Project request commands (student view).
#[derive(Clone, Debug, Subcommand)]
pub enum ProjectCommands {
    /// Submit a project request.
    Submit {
        /// Project title.
        #[arg(long)]
        title: String,
        /// Technology track: Python, Java, AI/ML, IoT, Web, Android.
        #[arg(long)]
        technology: String,
        /// What the project should do.
        #[arg(long, default_value = "")]
        description: String,
        /// Reference file to upload alongside the request.
        #[arg(long)]
        file: Option<String>,
    },
    /// List your project requests.
    List {
        #[arg(long)]
        limit: Option<u32>,
    },
}
