use std::sync::Arc;

use finboard_core::{
    bills::{BillService, BillServiceTrait},
    cards::{CardService, CardServiceTrait},
    categories::{CategoryService, CategoryServiceTrait},
    debts::{DebtService, DebtServiceTrait},
    dreams::{DreamService, DreamServiceTrait},
    income::{IncomeService, IncomeServiceTrait},
    investments::{InvestmentService, InvestmentServiceTrait},
    subscription::{
        PaymentGatewayTrait, StripeGateway, SubscriptionService, SubscriptionServiceTrait,
    },
    summary::{SummaryService, SummaryServiceTrait},
    users::{UserService, UserServiceTrait},
};
use finboard_storage_sqlite::{
    db, BillRepository, CardRepository, CategoryRepository, DbPool, DebtRepository,
    DreamRepository, IncomeRepository, InvestmentRepository, SubscriberRepository,
    UserRepository,
};
use rand::RngCore;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::auth::{decode_secret_key, AuthManager};
use crate::config::Config;

pub struct AppState {
    pub pool: Arc<DbPool>,
    pub auth: Arc<AuthManager>,
    pub subscription_required: bool,
    pub user_service: Arc<dyn UserServiceTrait + Send + Sync>,
    pub category_service: Arc<dyn CategoryServiceTrait + Send + Sync>,
    pub bill_service: Arc<dyn BillServiceTrait + Send + Sync>,
    pub income_service: Arc<dyn IncomeServiceTrait + Send + Sync>,
    pub card_service: Arc<dyn CardServiceTrait + Send + Sync>,
    pub debt_service: Arc<dyn DebtServiceTrait + Send + Sync>,
    pub investment_service: Arc<dyn InvestmentServiceTrait + Send + Sync>,
    pub dream_service: Arc<dyn DreamServiceTrait + Send + Sync>,
    pub summary_service: Arc<dyn SummaryServiceTrait + Send + Sync>,
    pub subscription_service: Arc<dyn SubscriptionServiceTrait + Send + Sync>,
}

pub fn init_tracing() {
    let log_format = std::env::var("FB_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

fn signing_key(config: &Config) -> anyhow::Result<Vec<u8>> {
    match config.secret_key.as_deref() {
        Some(raw) => decode_secret_key(raw),
        None => {
            tracing::warn!(
                "FB_SECRET_KEY is not set; using a random key, sessions will not survive a restart"
            );
            let mut bytes = vec![0u8; 32];
            rand::rngs::OsRng.fill_bytes(&mut bytes);
            Ok(bytes)
        }
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = db::spawn_writer((*pool).clone());

    let user_repo = Arc::new(UserRepository::new(pool.clone(), writer.clone()));
    let category_repo = Arc::new(CategoryRepository::new(pool.clone()));
    let bill_repo = Arc::new(BillRepository::new(pool.clone(), writer.clone()));
    let income_repo = Arc::new(IncomeRepository::new(pool.clone(), writer.clone()));
    let card_repo = Arc::new(CardRepository::new(pool.clone(), writer.clone()));
    let debt_repo = Arc::new(DebtRepository::new(pool.clone(), writer.clone()));
    let investment_repo = Arc::new(InvestmentRepository::new(pool.clone(), writer.clone()));
    let dream_repo = Arc::new(DreamRepository::new(pool.clone(), writer.clone()));
    let subscriber_repo = Arc::new(SubscriberRepository::new(pool.clone(), writer.clone()));

    let gateway: Option<Arc<dyn PaymentGatewayTrait>> = match config.stripe.clone() {
        Some(stripe) => {
            tracing::info!("Stripe payment gateway enabled");
            Some(Arc::new(StripeGateway::new(stripe)))
        }
        None => {
            tracing::info!("No payment gateway configured; checkout and portal are disabled");
            None
        }
    };

    let user_service = Arc::new(UserService::new(user_repo));
    let category_service = Arc::new(CategoryService::new(category_repo.clone()));
    let bill_service = Arc::new(BillService::new(bill_repo.clone(), category_repo.clone()));
    let income_service = Arc::new(IncomeService::new(income_repo.clone(), category_repo));
    let card_service = Arc::new(CardService::new(card_repo.clone()));
    let debt_service = Arc::new(DebtService::new(debt_repo.clone()));
    let investment_service = Arc::new(InvestmentService::new(investment_repo.clone()));
    let dream_service = Arc::new(DreamService::new(dream_repo.clone()));
    let summary_service = Arc::new(SummaryService::new(
        income_repo,
        bill_repo,
        debt_repo,
        investment_repo,
        card_repo,
        dream_repo,
    ));
    let subscription_service = Arc::new(SubscriptionService::new(subscriber_repo, gateway));

    if !config.subscription_required {
        tracing::warn!("Subscription gate disabled; data routes are open to every signed-in user");
    }

    let auth = Arc::new(AuthManager::new(&signing_key(config)?, config.token_ttl));

    Ok(Arc::new(AppState {
        pool,
        auth,
        subscription_required: config.subscription_required,
        user_service,
        category_service,
        bill_service,
        income_service,
        card_service,
        debt_service,
        investment_service,
        dream_service,
        summary_service,
        subscription_service,
    }))
}
