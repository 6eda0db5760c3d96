use sea_orm::{ActiveValue, DatabaseConnection, IntoActiveModel};

use crate::server::{
    data::{repository::Repository, unit_of_work::UnitOfWork, user::UserRepository},
    error::{auth::AuthError, validation::ValidationError, AppError},
    model::user::{RegisterUserParams, UpdateUserParams, User},
    service::complete,
    util::password::{generate_reset_password, hash_password, verify_password},
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// All accounts ordered by name.
    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        let users = UserRepository::new(self.db).get_all().await?;

        Ok(users.into_iter().map(User::from_entity).collect())
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let repo = Repository::<_, entity::app_user::Entity>::new(self.db);

        Ok(repo.get_by_id(id.to_string()).await?.map(User::from_entity))
    }

    /// Creates an account with a hashed password and a fresh UUID.
    ///
    /// Fails with `BadRequest` if the email is already registered.
    pub async fn register(&self, params: RegisterUserParams) -> Result<User, AppError> {
        let password_hash = hash_password(&params.password)?;
        let uow = UnitOfWork::begin(self.db).await?;

        if UserRepository::new(uow.connection())
            .find_by_email(&params.email)
            .await?
            .is_some()
        {
            return Err(AppError::BadRequest(format!(
                "Email {} is already registered",
                params.email
            )));
        }

        let user = uow
            .repository::<entity::app_user::Entity>()
            .add(entity::app_user::ActiveModel {
                id: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
                user_name: ActiveValue::Set(params.name),
                email: ActiveValue::Set(params.email),
                password_hash: ActiveValue::Set(password_hash),
                is_admin: ActiveValue::Set(params.is_admin),
            })
            .await?;

        complete(uow).await?;

        Ok(User::from_entity(user))
    }

    /// Changes an account's name and email. Returns None if it doesn't exist.
    pub async fn update(
        &self,
        id: &str,
        params: UpdateUserParams,
    ) -> Result<Option<User>, AppError> {
        let uow = UnitOfWork::begin(self.db).await?;
        let repo = uow.repository::<entity::app_user::Entity>();

        let Some(existing) = repo.get_by_id(id.to_string()).await? else {
            return Ok(None);
        };

        if existing.email != params.email
            && UserRepository::new(uow.connection())
                .find_by_email(&params.email)
                .await?
                .is_some()
        {
            return Err(AppError::BadRequest(format!(
                "Email {} is already registered",
                params.email
            )));
        }

        let mut model = existing.into_active_model();
        model.user_name = ActiveValue::Set(params.name);
        model.email = ActiveValue::Set(params.email);
        let user = repo.update(model).await?;

        complete(uow).await?;

        Ok(Some(User::from_entity(user)))
    }

    /// Changes the caller's own password after checking the current one.
    pub async fn change_password(
        &self,
        user: entity::app_user::Model,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), AppError> {
        if new_password.is_empty() {
            return Err(ValidationError::EmptyField("newPassword").into());
        }

        if !verify_password(current_password, &user.password_hash)? {
            return Err(AppError::BadRequest(
                "Current password is incorrect".to_string(),
            ));
        }

        self.set_password(user, new_password).await
    }

    /// Replaces another account's password with a generated one and returns it.
    ///
    /// Returns None if the account doesn't exist. Admins can't reset their own password
    /// this way.
    pub async fn reset_password(
        &self,
        caller_id: &str,
        id: &str,
    ) -> Result<Option<String>, AppError> {
        if caller_id == id {
            return Err(AuthError::SelfAction("reset the password of").into());
        }

        let repo = Repository::<_, entity::app_user::Entity>::new(self.db);
        let Some(user) = repo.get_by_id(id.to_string()).await? else {
            return Ok(None);
        };

        let password = generate_reset_password();
        self.set_password(user, &password).await?;

        Ok(Some(password))
    }

    /// Deletes another account. Returns false if it doesn't exist.
    pub async fn delete(&self, caller_id: &str, id: &str) -> Result<bool, AppError> {
        if caller_id == id {
            return Err(AuthError::SelfAction("delete").into());
        }

        let uow = UnitOfWork::begin(self.db).await?;
        let repo = uow.repository::<entity::app_user::Entity>();

        let Some(existing) = repo.get_by_id(id.to_string()).await? else {
            return Ok(false);
        };

        repo.delete(existing).await?;

        complete(uow).await?;

        Ok(true)
    }

    async fn set_password(
        &self,
        user: entity::app_user::Model,
        password: &str,
    ) -> Result<(), AppError> {
        let password_hash = hash_password(password)?;
        let uow = UnitOfWork::begin(self.db).await?;

        let mut model = user.into_active_model();
        model.password_hash = ActiveValue::Set(password_hash);
        uow.repository::<entity::app_user::Entity>()
            .update(model)
            .await?;

        complete(uow).await
    }
}
