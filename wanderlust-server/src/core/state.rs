use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::core::Config;
use crate::db::DbService;
use crate::db::models::User;
use crate::db::repository::UserRepository;
use crate::utils::{AppError, AppResult};

/// 服务器状态 - 持有所有共享服务的引用
///
/// ServerState 在进程启动时构造一次，之后以浅拷贝注入到每个
/// handler (axum `State`)。数据库句柄是唯一的共享可变资源，
/// 各仓库按请求从它构造，不存在全局单例模型注册表。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | db | Surreal<Db> | 嵌入式数据库 |
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 嵌入式数据库 (SurrealDB)
    pub db: Surreal<Db>,
}

impl ServerState {
    /// 创建服务器状态 (手动构造，测试场景常用)
    pub fn new(config: Config, db: Surreal<Db>) -> Self {
        Self { config, db }
    }

    /// 初始化服务器状态
    ///
    /// 按顺序初始化：
    /// 1. 工作目录结构
    /// 2. 数据库 (work_dir/database/wanderlust.db)
    /// 3. 管理员账号 (标准 argon2 哈希路径，无明文旁路)
    ///
    /// # Panics
    ///
    /// 数据库初始化失败时 panic
    pub async fn initialize(config: &Config) -> Self {
        config
            .ensure_work_dir_structure()
            .expect("Failed to create work directory structure");

        let db_path = config.database_dir().join("wanderlust.db");
        let db_service = DbService::new(&db_path.to_string_lossy())
            .await
            .expect("Failed to initialize database");

        let state = Self::new(config.clone(), db_service.db);

        state
            .ensure_admin_account()
            .await
            .expect("Failed to provision admin account");

        state
    }

    /// 获取数据库实例
    pub fn get_db(&self) -> Surreal<Db> {
        self.db.clone()
    }

    /// 确保管理员账号存在
    ///
    /// 管理员与普通用户走完全相同的注册存储路径 (argon2 哈希)，
    /// 登录时不存在任何硬编码凭据旁路。
    pub async fn ensure_admin_account(&self) -> AppResult<()> {
        let repo = UserRepository::new(self.get_db());
        if repo.find_by_email(&self.config.admin_email).await?.is_some() {
            return Ok(());
        }

        let password = User::hash_password(&self.config.admin_password)
            .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?;

        repo.create(User {
            id: None,
            name: "Super Admin".to_string(),
            email: self.config.admin_email.clone(),
            password,
            role: "admin".to_string(),
            hometown: None,
            dob: None,
        })
        .await?;

        tracing::info!(email = %self.config.admin_email, "Provisioned admin account");
        Ok(())
    }
}
