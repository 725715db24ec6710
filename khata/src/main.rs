use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use khatalib::auth::{self, LoginOutcome};
use khatalib::bridge;
use khatalib::error::Result;
use khatalib::model::{now_millis, time_id, Charge, LoginStatus, Payment, PriceTemplate};
use khatalib::report;
use khatalib::storage::FileStorage;
use khatalib::store::LedgerStore;
use rust_decimal::Decimal;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "khata", version, about = "Общий журнал расчётов дизайнера и заказчика")]
struct Cli {
    /// Каталог с данными журнала
    #[arg(long = "data-dir", default_value = ".")]
    data_dir: PathBuf,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Показать журнал и итоги
    Show,
    /// Добавить начисление за услугу (дизайнер)
    Charge {
        /// Название услуги
        #[arg(long)]
        service: String,
        /// Сумма (Rs.)
        #[arg(long)]
        amount: Decimal,
        /// Дата (по умолчанию сегодня)
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Кто добавил
        #[arg(long = "by", default_value = "Sanjaya")]
        added_by: String,
    },
    /// Добавить оплату (заказчик)
    Payment {
        /// Способ оплаты
        #[arg(long)]
        method: String,
        /// Сумма (Rs.)
        #[arg(long)]
        amount: Decimal,
        /// Дата (по умолчанию сегодня)
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Примечание
        #[arg(long)]
        note: Option<String>,
        /// Кто добавил
        #[arg(long = "by", default_value = "Ravi")]
        added_by: String,
    },
    /// Шаблоны цен для быстрого ввода
    Template {
        #[command(subcommand)]
        action: TemplateCmd,
    },
    /// Ссылка для переноса журнала на другое устройство
    Export {
        /// Базовый адрес; без него печатается голый блоб
        #[arg(long = "base-url")]
        base_url: Option<String>,
    },
    /// Импорт журнала из ссылки или блоба (полная замена)
    Import {
        /// Ссылка с параметром bridge или сам блоб
        blob: String,
    },
    /// Журнал безопасности
    Logs {
        /// Очистить журнал
        #[arg(long)]
        clear: bool,
    },
    /// Сводка по расчётам
    Summary,
    /// Проверка входа; неудачные попытки фиксируются
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
}

#[derive(Subcommand, Debug)]
enum TemplateCmd {
    /// Добавить шаблон
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        amount: Decimal,
    },
    /// Удалить шаблон по id
    Remove { id: String },
    /// Список шаблонов
    List,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let store = LedgerStore::new(FileStorage::new(&cli.data_dir));

    match cli.cmd {
        Cmd::Show => show(&store)?,
        Cmd::Charge {
            service,
            amount,
            date,
            added_by,
        } => {
            store.add_charge(Charge {
                id: time_id(),
                service,
                amount,
                date: date.unwrap_or_else(|| Local::now().date_naive()),
                added_by,
                timestamp: now_millis(),
            })?;
            println!("Начисление добавлено.");
        }
        Cmd::Payment {
            method,
            amount,
            date,
            note,
            added_by,
        } => {
            store.add_payment(Payment {
                id: time_id(),
                method,
                amount,
                date: date.unwrap_or_else(|| Local::now().date_naive()),
                added_by,
                note,
                timestamp: now_millis(),
            })?;
            println!("Оплата добавлена.");
        }
        Cmd::Template { action } => template(&store, action)?,
        Cmd::Export { base_url } => {
            let state = store.read()?;
            match base_url {
                Some(base) => println!("{}", bridge::share_link(&base, &state)?),
                None => println!("{}", bridge::encode(&state)?),
            }
        }
        Cmd::Import { blob } => {
            let raw = bridge::extract_blob(&blob).unwrap_or(&blob);
            if store.import_data(raw) {
                let state = store.read()?;
                println!(
                    "Журнал обновлён: начислений {}, оплат {}.",
                    state.charges.len(),
                    state.payments.len()
                );
            } else {
                println!("Не удалось прочитать данные, журнал не изменён.");
            }
        }
        Cmd::Logs { clear } => {
            if clear {
                store.clear_security_logs()?;
                println!("Журнал безопасности очищен.");
            } else {
                let state = store.read()?;
                if state.security_logs.is_empty() {
                    println!("Журнал безопасности пуст.");
                }
                for log in &state.security_logs {
                    println!("{}  {}  {:?}", log.date, log.attempted_email, log.status);
                }
            }
        }
        Cmd::Summary => {
            let state = store.read()?;
            print!("{}", report::render(&state));
        }
        Cmd::Login { email, password } => match auth::attempt(&email, &password) {
            LoginOutcome::Success(user) => {
                println!("Вход выполнен: {} ({:?})", user.name, user.role);
            }
            LoginOutcome::WrongPassword => {
                store.add_security_log(auth::failure_log(&email, LoginStatus::WrongPassword))?;
                println!("Неверный пароль, попытка записана.");
            }
            LoginOutcome::UnauthorizedEmail => {
                store.add_security_log(auth::failure_log(&email, LoginStatus::UnauthorizedEmail))?;
                println!("Email не в списке допущенных, попытка записана.");
            }
        },
    }

    Ok(())
}

fn show<S: khatalib::storage::Storage>(store: &LedgerStore<S>) -> Result<()> {
    let state = store.read()?;

    println!("Начисления ({}):", state.charges.len());
    for c in &state.charges {
        println!("  {}  {}  Rs. {}  [{}]", c.date, c.service, c.amount, c.added_by);
    }

    println!("Оплаты ({}):", state.payments.len());
    for p in &state.payments {
        let note = p.note.as_deref().unwrap_or("-");
        println!(
            "  {}  {}  Rs. {}  [{}]  {}",
            p.date, p.method, p.amount, p.added_by, note
        );
    }

    println!(
        "Итого: начислено Rs. {}, оплачено Rs. {}, сальдо Rs. {}",
        state.total_costs(),
        state.total_paid(),
        state.balance()
    );
    Ok(())
}

fn template<S: khatalib::storage::Storage>(
    store: &LedgerStore<S>,
    action: TemplateCmd,
) -> Result<()> {
    match action {
        TemplateCmd::Add { name, amount } => {
            let mut templates = store.read()?.templates;
            templates.push(PriceTemplate {
                id: time_id(),
                name,
                amount,
            });
            store.save_templates(templates)?;
            println!("Шаблон добавлен.");
        }
        TemplateCmd::Remove { id } => {
            let templates = store.read()?.templates;
            let rest: Vec<_> = templates.into_iter().filter(|t| t.id != id).collect();
            store.save_templates(rest)?;
            println!("Шаблон удалён.");
        }
        TemplateCmd::List => {
            for t in &store.read()?.templates {
                println!("  {}  {}  Rs. {}", t.id, t.name, t.amount);
            }
        }
    }
    Ok(())
}
