//! 用户与学校成员关联存储操作

use super::SeaOrmStorage;
use crate::entity::user_relations::{ActiveModel, Column, Entity as UserRelations};
use crate::errors::{GradebookError, Result};
use crate::models::users::entities::{UserRelation, UserRole};
use sea_orm::{ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, Set};

impl SeaOrmStorage {
    /// 建立用户与学校成员的关联
    ///
    /// user_id 与 (role, actor_id) 上各有唯一索引，
    /// 重复关联由数据库拒绝。
    pub async fn create_user_relation_impl(
        &self,
        user_id: i64,
        role: UserRole,
        actor_id: i64,
    ) -> Result<UserRelation> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            user_id: Set(user_id),
            role: Set(role.to_string()),
            actor_id: Set(actor_id),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| GradebookError::database_operation(format!("Failed to create user relation: {e}")))?;

        Ok(result.into_relation())
    }

    /// 通过用户 ID 查询关联
    pub async fn get_relation_by_user_id_impl(&self, user_id: i64) -> Result<Option<UserRelation>> {
        let result = UserRelations::find()
            .filter(Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| GradebookError::database_operation(format!("Failed to query user relation: {e}")))?;

        Ok(result.map(|m| m.into_relation()))
    }

    /// 通过 (角色, 成员ID) 查询关联
    pub async fn get_relation_by_actor_impl(
        &self,
        role: UserRole,
        actor_id: i64,
    ) -> Result<Option<UserRelation>> {
        let result = UserRelations::find()
            .filter(
                Condition::all()
                    .add(Column::Role.eq(role.to_string()))
                    .add(Column::ActorId.eq(actor_id)),
            )
            .one(&self.db)
            .await
            .map_err(|e| GradebookError::database_operation(format!("Failed to query user relation: {e}")))?;

        Ok(result.map(|m| m.into_relation()))
    }

    /// 删除用户的关联记录
    pub async fn delete_relation_by_user_id_impl(&self, user_id: i64) -> Result<bool> {
        let result = UserRelations::delete_many()
            .filter(Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(|e| GradebookError::database_operation(format!("Failed to delete user relation: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
