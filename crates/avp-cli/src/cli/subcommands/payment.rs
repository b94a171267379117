use clap::Subcommand;

/// Manual payment commands (student view).
#[derive(Clone, Debug, Subcommand)]
pub enum PaymentCommands {
    /// Record a manual payment, optionally with uploaded proof.
    Create {
        /// Amount paid (non-negative).
        #[arg(long)]
        amount: f64,
        /// Proof file to upload (screenshot, transaction record).
        #[arg(long)]
        proof: Option<String>,
    },
    /// List your payments.
    List {
        #[arg(long)]
        limit: Option<u32>,
    },
}
