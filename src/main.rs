use chrono::Local;
use clap::{Parser, Subcommand};
use sellerguard::core::assembler;
use sellerguard::utils::error::ErrorSeverity;
use sellerguard::utils::{logger, validation::Validate};
use sellerguard::{
    Assistant, ChatHistory, ChatMessage, Complaint, ConfigProvider, FileKnowledge, GuardConfig,
    Lead, LeadStore, LocalStorage, Storage, SupabaseLeads,
};
use std::io::{BufRead, Write};

#[derive(Parser)]
#[command(name = "sellerguard")]
#[command(about = "AI assistant for marketplace sellers: Q&A, claim documents, leads")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "sellerguard.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Ask a single question
    Ask { question: String },

    /// Interactive chat session
    Chat,

    /// Render a pre-court claim document (.docx)
    Claim {
        #[arg(long)]
        seller: String,

        #[arg(long)]
        inn: String,

        #[arg(long)]
        act: String,

        #[arg(long)]
        money: i64,

        #[arg(long)]
        problem: String,
    },

    /// Submit a contact lead for a follow-up by a lawyer
    Lead {
        #[arg(long)]
        contact: String,

        #[arg(long)]
        problem: String,

        #[arg(long)]
        amount: i64,
    },

    /// List captured leads (owner only)
    Leads {
        #[arg(long)]
        password: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("🛡️ Starting SellerGuard assistant");
    tracing::info!("📁 Loading configuration from: {}", cli.config);

    // 載入 TOML 配置
    let config = match GuardConfig::from_file(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", cli.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let result = match cli.command {
        Command::Ask { question } => run_ask(config, &question).await,
        Command::Chat => run_chat(config).await,
        Command::Claim {
            seller,
            inn,
            act,
            money,
            problem,
        } => {
            let complaint = Complaint {
                seller,
                inn,
                act,
                money,
                problem,
            };
            run_claim(config, complaint).await
        }
        Command::Lead {
            contact,
            problem,
            amount,
        } => run_lead(config, contact, problem, amount).await,
        Command::Leads { password } => run_leads(config, &password).await,
    };

    if let Err(e) = result {
        tracing::error!(
            "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        // 根據錯誤嚴重程度決定退出碼
        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };

        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

async fn run_ask(config: GuardConfig, question: &str) -> sellerguard::Result<()> {
    let knowledge = FileKnowledge::new(config.knowledge_path());
    let assistant = Assistant::new(config, knowledge);

    // AI 失敗不算致命：轉成固定的「服務不可用」訊息給用戶
    match assistant.answer(question).await {
        Ok(reply) => {
            tracing::debug!("Answered by model {}", reply.model);
            println!("{}", reply.text);
        }
        Err(e) => {
            println!("{}", e.user_friendly_message());
        }
    }

    Ok(())
}

async fn run_chat(config: GuardConfig) -> sellerguard::Result<()> {
    let knowledge = FileKnowledge::new(config.knowledge_path());
    let assistant = Assistant::new(config, knowledge);

    // 對話歷史由呼叫端持有，核心完全無狀態
    let mut history = ChatHistory::new();

    println!("🤖 Система активна. Задайте вопрос (пустая строка — выход).");

    let stdin = std::io::stdin();
    loop {
        print!("Ваш вопрос: ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let question = line.trim();
        if question.is_empty() {
            break;
        }

        history.push(ChatMessage::user(question));

        let reply_text = match assistant.answer(question).await {
            Ok(reply) => {
                tracing::debug!("Answered by model {}", reply.model);
                reply.text
            }
            Err(e) => e.user_friendly_message(),
        };

        println!("{}", reply_text);
        history.push(ChatMessage::assistant(reply_text));
    }

    tracing::info!("Chat session finished after {} turns", history.len());
    Ok(())
}

async fn run_claim(config: GuardConfig, complaint: Complaint) -> sellerguard::Result<()> {
    let today = Local::now().date_naive();
    let bytes = assembler::render_complaint(&complaint, today)?;

    let storage = LocalStorage::new(config.output_path());
    storage.write_file(assembler::CLAIM_FILENAME, &bytes).await?;

    let output_path = storage.resolve(assembler::CLAIM_FILENAME);
    tracing::info!("📄 Claim document saved to: {}", output_path.display());
    println!("✅ Документ готов: {}", output_path.display());

    Ok(())
}

async fn run_lead(
    config: GuardConfig,
    contact: String,
    problem: String,
    amount: i64,
) -> sellerguard::Result<()> {
    let store = match config.lead_store() {
        Some((url, key)) => SupabaseLeads::new(url, key),
        None => {
            // 缺少憑證只給固定警告，流程照常結束
            println!("⚠️ Функция недоступна: хранилище заявок не настроено.");
            return Ok(());
        }
    };

    let lead = Lead::new(contact, problem, amount);

    match store.submit(&lead).await {
        Ok(()) => println!("✅ Заявка отправлена! Юрист свяжется с вами."),
        Err(e) => println!("{}", e.user_friendly_message()),
    }

    Ok(())
}

async fn run_leads(config: GuardConfig, password: &str) -> sellerguard::Result<()> {
    let admin_password = match config.admin_password() {
        Some(p) => p,
        None => {
            println!("⚠️ Функция недоступна: пароль владельца не настроен.");
            return Ok(());
        }
    };

    if password != admin_password {
        println!("❌ Неверный пароль.");
        return Ok(());
    }

    let store = match config.lead_store() {
        Some((url, key)) => SupabaseLeads::new(url, key),
        None => {
            println!("⚠️ Функция недоступна: хранилище заявок не настроено.");
            return Ok(());
        }
    };

    match store.fetch_all().await {
        Ok(leads) => {
            if leads.is_empty() {
                println!("Заявок пока нет.");
            } else {
                println!("📋 Заявки ({}):", leads.len());
                for lead in leads {
                    println!(
                        "  {} | {} | {} руб. | {}",
                        lead.contact,
                        lead.problem_type,
                        lead.amount,
                        lead.created_at.as_deref().unwrap_or("-")
                    );
                }
            }
        }
        Err(e) => println!("{}", e.user_friendly_message()),
    }

    Ok(())
}
