use std::sync::Arc;
use std::time::Instant;

use crate::catalog::{CustomerCatalog, FoodCatalog, SeedData};
use crate::core::Config;
use crate::utils::AppResult;

/// 服务器状态 - 持有所有共享只读数据
///
/// 使用 Arc 实现浅拷贝，每个请求克隆的成本极低。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Arc<Config> | 配置项 (不可变) |
/// | foods | Arc<FoodCatalog> | 菜品目录 + 分类 + 餐厅 |
/// | customers | Arc<CustomerCatalog> | 顾客目录 |
/// | started_at | Instant | 启动时间 (健康检查 uptime) |
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Arc<Config>,
    pub foods: Arc<FoodCatalog>,
    pub customers: Arc<CustomerCatalog>,
    pub started_at: Instant,
}

impl ServerState {
    /// 从已加载的种子数据构造
    pub fn new(config: Config, seed: SeedData) -> Self {
        let SeedData {
            categories,
            restaurants,
            foods,
            customers,
        } = seed;

        Self {
            config: Arc::new(config),
            foods: Arc::new(FoodCatalog::new(foods, categories, restaurants)),
            customers: Arc::new(CustomerCatalog::new(customers)),
            started_at: Instant::now(),
        }
    }

    /// 初始化服务器状态
    ///
    /// 按配置加载目录数据 (内置或 `CATALOG_DIR`)
    pub fn initialize(config: &Config) -> AppResult<Self> {
        let seed = SeedData::load(config.catalog_dir.as_deref())?;
        tracing::info!(
            foods = seed.foods.len(),
            customers = seed.customers.len(),
            categories = seed.categories.len(),
            restaurants = seed.restaurants.len(),
            "Catalog loaded"
        );
        Ok(Self::new(config.clone(), seed))
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
