use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use spewpay::models::{
    OrgRole, OrgType, PageRequest, ResolvedAccount, RuleConfig, UpdateAllocationRequest, UpdateOrgRequest,
    UpdateRuleRequest,
};
use spewpay::money::{self, kobo_to_naira};
use spewpay::services::org::FundingSource;
use spewpay::services::auth;
use spewpay::validation::{self, SignupForm};
use spewpay::{ApiClient, ClientConfig, ClientError, FileTokenStore, IdempotencyKey, Period, Queries, TokenStore};
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Client(#[from] ClientError),
    #[error("failed to render output: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    InvalidArgument(String),
}

#[derive(Parser, Debug)]
#[command(name = "spewpay", about = "SpewPay wallet client")]
struct Cli {
    /// Versioned API root, e.g. https://api.spewpay.ng/api/v1
    #[arg(long, env = "SPEWPAY_API_URL")]
    api_url: Option<String>,

    #[arg(long, env = "SPEWPAY_SESSION_FILE")]
    session_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Auth(AuthCommand),
    Wallet(WalletCommand),
    Transfer(TransferCommand),
    Recipient(RecipientCommand),
    Deposit(DepositCommand),
    Org(OrgCommand),
    Invite(InviteCommand),
    Allocation(AllocationCommand),
    Rule(RuleCommand),
    /// Spending summary over completed wallet transactions.
    Insights {
        #[arg(long, value_enum, default_value_t = PeriodArg::Month)]
        period: PeriodArg,
    },
}

// =============================================================================
// ARGUMENTS
// =============================================================================

#[derive(Args, Debug, Clone, Copy)]
struct PageArgs {
    #[arg(long, default_value_t = 1)]
    page: u32,
    #[arg(long, default_value_t = 20)]
    limit: u32,
}

impl PageArgs {
    fn request(self) -> PageRequest {
        PageRequest { page: self.page.max(1), limit: self.limit.max(1) }
    }
}

#[derive(Args, Debug)]
struct AuthCommand {
    #[command(subcommand)]
    command: AuthSubcommand,
}

#[derive(Subcommand, Debug)]
enum AuthSubcommand {
    Register {
        #[arg(long)]
        email: String,
        #[arg(long, env = "SPEWPAY_PASSWORD", hide_env_values = true)]
        password: String,
        /// Defaults to --password.
        #[arg(long)]
        confirm_password: Option<String>,
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        phone: Option<String>,
    },
    Login {
        #[arg(long, env = "SPEWPAY_EMAIL")]
        email: String,
        #[arg(long, env = "SPEWPAY_PASSWORD", hide_env_values = true)]
        password: String,
    },
    Logout,
    Whoami,
    ForgotPassword {
        #[arg(long)]
        email: String,
    },
    ResetPassword {
        #[arg(long)]
        token: String,
        #[arg(long, env = "SPEWPAY_PASSWORD", hide_env_values = true)]
        password: String,
        #[arg(long)]
        confirm_password: Option<String>,
    },
    VerifyEmail {
        #[arg(long)]
        token: String,
    },
}

#[derive(Args, Debug)]
struct WalletCommand {
    #[command(subcommand)]
    command: WalletSubcommand,
}

#[derive(Subcommand, Debug)]
enum WalletSubcommand {
    Show,
    Balance,
    Transactions(PageArgs),
    Ledger(PageArgs),
}

#[derive(Args, Debug)]
struct TransferCommand {
    #[command(subcommand)]
    command: TransferSubcommand,
}

#[derive(Subcommand, Debug)]
enum TransferSubcommand {
    /// Send to another SpewPay user.
    Send {
        #[arg(long)]
        to: String,
        /// Naira, e.g. 1,500.50
        #[arg(long)]
        amount: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        idempotency_key: Option<String>,
    },
    /// Find users by name or email.
    Search {
        term: String,
        #[arg(long, default_value_t = 10)]
        limit: u32,
    },
    Banks,
    /// Look up the holder of a bank account.
    Resolve {
        #[arg(long)]
        account_number: String,
        #[arg(long)]
        bank_code: String,
    },
    /// Cash out to a bank account.
    Withdraw {
        #[arg(long)]
        amount: String,
        #[arg(long)]
        bank_code: String,
        #[arg(long)]
        account_number: String,
        /// Resolved from the bank when omitted.
        #[arg(long)]
        account_name: Option<String>,
        #[arg(long)]
        narration: Option<String>,
        #[arg(long)]
        idempotency_key: Option<String>,
    },
}

#[derive(Args, Debug)]
struct RecipientCommand {
    #[command(subcommand)]
    command: RecipientSubcommand,
}

#[derive(Subcommand, Debug)]
enum RecipientSubcommand {
    List,
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        account_number: String,
        #[arg(long)]
        bank_code: String,
        #[arg(long)]
        bank_name: Option<String>,
    },
    Delete {
        recipient_id: String,
    },
}

#[derive(Args, Debug)]
struct DepositCommand {
    #[command(subcommand)]
    command: DepositSubcommand,
}

#[derive(Subcommand, Debug)]
enum DepositSubcommand {
    /// Start a checkout and print its URL.
    Init {
        #[arg(long)]
        amount: String,
        #[arg(long)]
        idempotency_key: Option<String>,
    },
    Verify {
        reference: String,
    },
    /// Verify the reference in a gateway redirect link.
    Callback {
        uri: String,
    },
}

#[derive(Args, Debug)]
struct OrgCommand {
    #[command(subcommand)]
    command: OrgSubcommand,
}

#[derive(Subcommand, Debug)]
enum OrgSubcommand {
    List,
    Show {
        org_id: String,
    },
    Create {
        #[arg(long)]
        name: String,
        #[arg(long = "type", value_enum)]
        kind: OrgTypeArg,
        #[arg(long)]
        description: Option<String>,
    },
    Update {
        org_id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    Delete {
        org_id: String,
    },
    Members {
        org_id: String,
    },
    SetRole {
        org_id: String,
        member_id: String,
        #[arg(long, value_enum)]
        role: RoleArg,
    },
    RemoveMember {
        org_id: String,
        member_id: String,
    },
}

#[derive(Args, Debug)]
struct InviteCommand {
    #[command(subcommand)]
    command: InviteSubcommand,
}

#[derive(Subcommand, Debug)]
enum InviteSubcommand {
    Send {
        org_id: String,
        #[arg(long)]
        email: String,
        #[arg(long, value_enum, default_value_t = RoleArg::Member)]
        role: RoleArg,
    },
    List {
        org_id: String,
    },
    /// Invites addressed to the signed-in user.
    Pending,
    Accept {
        invite_id: String,
    },
    Reject {
        invite_id: String,
    },
    Cancel {
        org_id: String,
        invite_id: String,
    },
}

#[derive(Args, Debug)]
struct AllocationCommand {
    #[command(subcommand)]
    command: AllocationSubcommand,
}

#[derive(Subcommand, Debug)]
enum AllocationSubcommand {
    List {
        org_id: String,
    },
    Show {
        org_id: String,
        allocation_id: String,
    },
    Create {
        org_id: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        manager: Option<String>,
        #[arg(long)]
        parent: Option<String>,
    },
    Update {
        org_id: String,
        allocation_id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        manager: Option<String>,
    },
    Freeze {
        org_id: String,
        allocation_id: String,
    },
    Unfreeze {
        org_id: String,
        allocation_id: String,
    },
    Fund {
        org_id: String,
        allocation_id: String,
        #[arg(long)]
        amount: String,
        /// Draw from the parent allocation instead of the org wallet.
        #[arg(long)]
        from_parent: bool,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        idempotency_key: Option<String>,
    },
    Transactions {
        org_id: String,
        allocation_id: String,
        #[command(flatten)]
        page: PageArgs,
    },
}

#[derive(Args, Debug)]
struct RuleCommand {
    #[command(subcommand)]
    command: RuleSubcommand,
}

#[derive(Subcommand, Debug)]
enum RuleSubcommand {
    List {
        allocation_id: String,
    },
    Create {
        allocation_id: String,
        #[command(flatten)]
        rule: RuleArgs,
    },
    Enable {
        allocation_id: String,
        rule_id: String,
    },
    Disable {
        allocation_id: String,
        rule_id: String,
    },
    Delete {
        allocation_id: String,
        rule_id: String,
    },
}

#[derive(Args, Debug, Default)]
struct RuleArgs {
    #[arg(long = "type", value_enum)]
    kind: RuleKindArg,
    /// Limit in naira (txn/daily/monthly limits).
    #[arg(long)]
    max_amount: Option<String>,
    /// HH:MM (time lock).
    #[arg(long)]
    start: Option<String>,
    #[arg(long)]
    end: Option<String>,
    /// 0 = Sunday .. 6 = Saturday; repeatable.
    #[arg(long = "day")]
    days: Vec<u8>,
    /// Allowed recipient user id; repeatable.
    #[arg(long = "recipient")]
    recipients: Vec<String>,
    /// Naira amount above which approval is required.
    #[arg(long)]
    threshold: Option<String>,
}

impl RuleArgs {
    fn build(&self) -> Result<RuleConfig, CliError> {
        let naira = |value: Option<&String>, flag: &str| -> Result<f64, CliError> {
            let raw = value.ok_or_else(|| missing(flag, self.kind))?;
            Ok(kobo_to_naira(money::parse_naira(raw).map_err(ClientError::from)?))
        };
        Ok(match self.kind {
            RuleKindArg::TxnLimit => RuleConfig::TxnLimit { max_amount: naira(self.max_amount.as_ref(), "--max-amount")? },
            RuleKindArg::DailyLimit => {
                RuleConfig::DailyLimit { max_amount: naira(self.max_amount.as_ref(), "--max-amount")? }
            }
            RuleKindArg::MonthlyLimit => {
                RuleConfig::MonthlyLimit { max_amount: naira(self.max_amount.as_ref(), "--max-amount")? }
            }
            RuleKindArg::TimeLock => RuleConfig::TimeLock {
                start_time: self.start.clone().ok_or_else(|| missing("--start", self.kind))?,
                end_time: self.end.clone().ok_or_else(|| missing("--end", self.kind))?,
                days_of_week: self.days.clone(),
            },
            RuleKindArg::Whitelist => RuleConfig::WhitelistRecipients { recipient_ids: self.recipients.clone() },
            RuleKindArg::RequiresApproval => {
                RuleConfig::RequiresApproval { threshold: naira(self.threshold.as_ref(), "--threshold")? }
            }
        })
    }
}

fn missing(flag: &str, kind: RuleKindArg) -> CliError {
    CliError::InvalidArgument(format!("{flag} is required for {kind:?} rules"))
}

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
enum RuleKindArg {
    #[default]
    TxnLimit,
    DailyLimit,
    MonthlyLimit,
    TimeLock,
    Whitelist,
    RequiresApproval,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum OrgTypeArg {
    Company,
    Family,
    Group,
    Couple,
    University,
}

impl From<OrgTypeArg> for OrgType {
    fn from(arg: OrgTypeArg) -> Self {
        match arg {
            OrgTypeArg::Company => Self::Company,
            OrgTypeArg::Family => Self::Family,
            OrgTypeArg::Group => Self::Group,
            OrgTypeArg::Couple => Self::Couple,
            OrgTypeArg::University => Self::University,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum RoleArg {
    Admin,
    Manager,
    Member,
}

impl From<RoleArg> for OrgRole {
    fn from(arg: RoleArg) -> Self {
        match arg {
            RoleArg::Admin => Self::Admin,
            RoleArg::Manager => Self::Manager,
            RoleArg::Member => Self::Member,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum PeriodArg {
    Week,
    Month,
    Year,
    All,
}

impl From<PeriodArg> for Period {
    fn from(arg: PeriodArg) -> Self {
        match arg {
            PeriodArg::Week => Self::Week,
            PeriodArg::Month => Self::Month,
            PeriodArg::Year => Self::Year,
            PeriodArg::All => Self::All,
        }
    }
}

// =============================================================================
// ENTRY
// =============================================================================

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if let CliError::Client(err) = &e {
                tracing::debug!(code = err.error_code(), status = ?err.status_code(), "command failed");
            }
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let mut config = ClientConfig::from_env()?;
    if let Some(api_url) = cli.api_url.as_deref() {
        config.api_url = ClientConfig::with_api_url(api_url)?.api_url;
    }
    if let Some(path) = cli.session_file {
        config.session_file = path;
    }
    tracing::debug!(api_url = %config.api_url, session_file = %config.session_file.display(), "config loaded");

    let store: Arc<dyn TokenStore> = Arc::new(FileTokenStore::new(config.session_file.clone()));
    let client = ApiClient::new(&config, store)?;
    let queries = Queries::new(client, config.callback_url.clone());

    match cli.command {
        Command::Auth(cmd) => run_auth(&queries, cmd.command).await,
        Command::Wallet(cmd) => run_wallet(&queries, cmd.command).await,
        Command::Transfer(cmd) => run_transfer(&queries, cmd.command).await,
        Command::Recipient(cmd) => run_recipient(&queries, cmd.command).await,
        Command::Deposit(cmd) => run_deposit(&queries, cmd.command).await,
        Command::Org(cmd) => run_org(&queries, cmd.command).await,
        Command::Invite(cmd) => run_invite(&queries, cmd.command).await,
        Command::Allocation(cmd) => run_allocation(&queries, cmd.command).await,
        Command::Rule(cmd) => run_rule(&queries, cmd.command).await,
        Command::Insights { period } => {
            let insights = queries
                .insights(period.into(), time::OffsetDateTime::now_utc())
                .await?;
            print_json(&insights)
        }
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

async fn run_auth(q: &Queries, command: AuthSubcommand) -> Result<(), CliError> {
    let client = q.client();
    match command {
        AuthSubcommand::Register { email, password, confirm_password, first_name, last_name, phone } => {
            let form = SignupForm {
                email,
                confirm_password: confirm_password.unwrap_or_else(|| password.clone()),
                password,
                first_name,
                last_name,
                phone,
            };
            let auth = q.register(&form).await?;
            eprintln!("signed in as {}", auth.user.display_name());
            print_json(&auth.user)
        }
        AuthSubcommand::Login { email, password } => {
            let auth = q.login(&email, &password).await?;
            eprintln!("signed in as {}", auth.user.display_name());
            print_json(&auth.user)
        }
        AuthSubcommand::Logout => {
            q.logout().await?;
            println!("ok");
            Ok(())
        }
        AuthSubcommand::Whoami => match auth::current_user(client).await? {
            Some(user) => print_json(&user),
            None => Err(ClientError::NotAuthenticated.into()),
        },
        AuthSubcommand::ForgotPassword { email } => print_json(&auth::forgot_password(client, &email).await?),
        AuthSubcommand::ResetPassword { token, password, confirm_password } => {
            let confirmation = confirm_password.unwrap_or_else(|| password.clone());
            print_json(&auth::reset_password(client, &token, &password, &confirmation).await?)
        }
        AuthSubcommand::VerifyEmail { token } => print_json(&auth::verify_email(client, &token).await?),
    }
}

async fn run_wallet(q: &Queries, command: WalletSubcommand) -> Result<(), CliError> {
    match command {
        WalletSubcommand::Show => print_json(&q.wallet().await?),
        WalletSubcommand::Balance => {
            let balance = q.balance().await?;
            println!("{}", balance.balance.display());
            Ok(())
        }
        WalletSubcommand::Transactions(page) => print_json(&q.transactions(page.request()).await?),
        WalletSubcommand::Ledger(page) => print_json(&q.ledger(page.request()).await?),
    }
}

async fn run_transfer(q: &Queries, command: TransferSubcommand) -> Result<(), CliError> {
    match command {
        TransferSubcommand::Send { to, amount, description, idempotency_key } => {
            let result = q
                .send_transfer(&to, parse_amount(&amount)?, description, idempotency_key.map(IdempotencyKey::from))
                .await?;
            print_json(&result)
        }
        TransferSubcommand::Search { term, limit } => print_json(&q.search_users(&term, limit).await?),
        TransferSubcommand::Banks => print_json(&q.banks().await?),
        TransferSubcommand::Resolve { account_number, bank_code } => {
            print_json(&q.resolve_account(&account_number, &bank_code).await?)
        }
        TransferSubcommand::Withdraw {
            amount,
            bank_code,
            account_number,
            account_name,
            narration,
            idempotency_key,
        } => {
            let amount_kobo = validation::parse_cash_amount(&amount)?;
            let account_name = match account_name {
                Some(name) => name,
                None => {
                    let resolved = q.resolve_account(&account_number, &bank_code).await?;
                    eprintln!("resolved account holder: {}", resolved.account_name);
                    resolved.account_name
                }
            };
            let account = ResolvedAccount { account_number, account_name, bank_code };
            let result = q
                .withdraw(amount_kobo, account, narration, idempotency_key.map(IdempotencyKey::from))
                .await?;
            print_json(&result)
        }
    }
}

async fn run_recipient(q: &Queries, command: RecipientSubcommand) -> Result<(), CliError> {
    match command {
        RecipientSubcommand::List => print_json(&q.recipients().await?),
        RecipientSubcommand::Add { name, account_number, bank_code, bank_name } => {
            print_json(&q.add_recipient(&name, &account_number, &bank_code, bank_name).await?)
        }
        RecipientSubcommand::Delete { recipient_id } => {
            q.delete_recipient(&recipient_id).await?;
            println!("ok");
            Ok(())
        }
    }
}

async fn run_deposit(q: &Queries, command: DepositSubcommand) -> Result<(), CliError> {
    match command {
        DepositSubcommand::Init { amount, idempotency_key } => {
            let amount_kobo = validation::parse_cash_amount(&amount)?;
            let init = q
                .initialize_deposit(amount_kobo, idempotency_key.map(IdempotencyKey::from))
                .await?;
            eprintln!("open to pay: {}", init.authorization_url);
            print_json(&init)
        }
        DepositSubcommand::Verify { reference } => print_json(&q.verify_deposit(&reference).await?),
        DepositSubcommand::Callback { uri } => print_json(&q.handle_payment_callback(&uri).await?),
    }
}

async fn run_org(q: &Queries, command: OrgSubcommand) -> Result<(), CliError> {
    match command {
        OrgSubcommand::List => print_json(&q.organizations().await?),
        OrgSubcommand::Show { org_id } => print_json(&q.organization(&org_id).await?),
        OrgSubcommand::Create { name, kind, description } => {
            print_json(&q.create_org(&name, kind.into(), description).await?)
        }
        OrgSubcommand::Update { org_id, name, description } => {
            print_json(&q.update_org(&org_id, UpdateOrgRequest { name, description }).await?)
        }
        OrgSubcommand::Delete { org_id } => {
            q.delete_org(&org_id).await?;
            println!("ok");
            Ok(())
        }
        OrgSubcommand::Members { org_id } => print_json(&q.members(&org_id).await?),
        OrgSubcommand::SetRole { org_id, member_id, role } => {
            print_json(&q.update_member_role(&org_id, &member_id, role.into()).await?)
        }
        OrgSubcommand::RemoveMember { org_id, member_id } => {
            q.remove_member(&org_id, &member_id).await?;
            println!("ok");
            Ok(())
        }
    }
}

async fn run_invite(q: &Queries, command: InviteSubcommand) -> Result<(), CliError> {
    match command {
        InviteSubcommand::Send { org_id, email, role } => print_json(&q.invite(&org_id, &email, role.into()).await?),
        InviteSubcommand::List { org_id } => print_json(&q.invites(&org_id).await?),
        InviteSubcommand::Pending => print_json(&q.pending_invites().await?),
        InviteSubcommand::Accept { invite_id } => print_json(&q.accept_invite(&invite_id).await?),
        InviteSubcommand::Reject { invite_id } => print_json(&q.reject_invite(&invite_id).await?),
        InviteSubcommand::Cancel { org_id, invite_id } => {
            q.cancel_invite(&org_id, &invite_id).await?;
            println!("ok");
            Ok(())
        }
    }
}

async fn run_allocation(q: &Queries, command: AllocationSubcommand) -> Result<(), CliError> {
    match command {
        AllocationSubcommand::List { org_id } => print_json(&q.allocations(&org_id).await?),
        AllocationSubcommand::Show { org_id, allocation_id } => {
            print_json(&q.allocation(&org_id, &allocation_id).await?)
        }
        AllocationSubcommand::Create { org_id, name, manager, parent } => {
            print_json(&q.create_allocation(&org_id, &name, manager, parent).await?)
        }
        AllocationSubcommand::Update { org_id, allocation_id, name, manager } => {
            let request = UpdateAllocationRequest { name, manager_user_id: manager };
            print_json(&q.update_allocation(&org_id, &allocation_id, request).await?)
        }
        AllocationSubcommand::Freeze { org_id, allocation_id } => {
            print_json(&q.freeze_allocation(&org_id, &allocation_id).await?)
        }
        AllocationSubcommand::Unfreeze { org_id, allocation_id } => {
            print_json(&q.unfreeze_allocation(&org_id, &allocation_id).await?)
        }
        AllocationSubcommand::Fund { org_id, allocation_id, amount, from_parent, description, idempotency_key } => {
            let source = if from_parent { FundingSource::Parent } else { FundingSource::Organization };
            let allocation = q
                .fund_allocation(
                    &org_id,
                    &allocation_id,
                    source,
                    parse_amount(&amount)?,
                    description,
                    idempotency_key.map(IdempotencyKey::from),
                )
                .await?;
            print_json(&allocation)
        }
        AllocationSubcommand::Transactions { org_id, allocation_id, page } => {
            print_json(&q.allocation_transactions(&org_id, &allocation_id, page.request()).await?)
        }
    }
}

async fn run_rule(q: &Queries, command: RuleSubcommand) -> Result<(), CliError> {
    match command {
        RuleSubcommand::List { allocation_id } => print_json(&q.rules(&allocation_id).await?),
        RuleSubcommand::Create { allocation_id, rule } => print_json(&q.create_rule(&allocation_id, rule.build()?).await?),
        RuleSubcommand::Enable { allocation_id, rule_id } => {
            let request = UpdateRuleRequest { rule: None, is_active: Some(true) };
            print_json(&q.update_rule(&allocation_id, &rule_id, request).await?)
        }
        RuleSubcommand::Disable { allocation_id, rule_id } => {
            let request = UpdateRuleRequest { rule: None, is_active: Some(false) };
            print_json(&q.update_rule(&allocation_id, &rule_id, request).await?)
        }
        RuleSubcommand::Delete { allocation_id, rule_id } => {
            q.delete_rule(&allocation_id, &rule_id).await?;
            println!("ok");
            Ok(())
        }
    }
}

// =============================================================================
// HELPERS
// =============================================================================

fn parse_amount(raw: &str) -> Result<i64, CliError> {
    Ok(money::parse_naira(raw).map_err(ClientError::from)?)
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
