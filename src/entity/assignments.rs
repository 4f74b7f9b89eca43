//! 作业实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "assignments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub subject_id: i64,
    pub name: String,
    pub kind: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub deadline: Option<i64>,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::subjects::Entity",
        from = "Column::SubjectId",
        to = "super::subjects::Column::Id"
    )]
    Subject,
    #[sea_orm(has_many = "super::gradebook_entries::Entity")]
    GradebookEntries,
}

impl Related<super::subjects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subject.def()
    }
}

impl Related<super::gradebook_entries::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GradebookEntries.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_assignment(self) -> crate::models::assignments::entities::Assignment {
        use crate::models::assignments::entities::{Assignment, AssignmentKind};
        use chrono::{DateTime, Utc};

        Assignment {
            id: self.id,
            subject_id: self.subject_id,
            name: self.name,
            kind: self
                .kind
                .parse::<AssignmentKind>()
                .unwrap_or(AssignmentKind::Homework),
            description: self.description,
            deadline: self
                .deadline
                .map(|ts| DateTime::<Utc>::from_timestamp(ts, 0).unwrap_or_default()),
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}
