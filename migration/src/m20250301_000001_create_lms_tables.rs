use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建课程表
        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Courses::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Courses::Subject).string().not_null())
                    .col(ColumnDef::new(Courses::Number).integer().not_null())
                    .col(ColumnDef::new(Courses::Name).string().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建开课表
        manager
            .create_table(
                Table::create()
                    .table(ClassOfferings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ClassOfferings::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ClassOfferings::CourseId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ClassOfferings::Season).string().not_null())
                    .col(ColumnDef::new(ClassOfferings::Year).integer().not_null())
                    .col(ColumnDef::new(ClassOfferings::Location).string().not_null())
                    .col(
                        ColumnDef::new(ClassOfferings::StartTime)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ClassOfferings::EndTime).integer().not_null())
                    .col(
                        ColumnDef::new(ClassOfferings::InstructorUid)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ClassOfferings::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ClassOfferings::Table, ClassOfferings::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建作业分类表
        manager
            .create_table(
                Table::create()
                    .table(AssignmentCategories::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AssignmentCategories::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AssignmentCategories::ClassId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AssignmentCategories::Name)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AssignmentCategories::Weight)
                            .double()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(AssignmentCategories::Table, AssignmentCategories::ClassId)
                            .to(ClassOfferings::Table, ClassOfferings::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建作业表
        manager
            .create_table(
                Table::create()
                    .table(Assignments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Assignments::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Assignments::CategoryId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Assignments::Name).string().not_null())
                    .col(ColumnDef::new(Assignments::MaxPoints).double().not_null())
                    .col(ColumnDef::new(Assignments::Due).big_integer().not_null())
                    .col(ColumnDef::new(Assignments::Contents).text().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Assignments::Table, Assignments::CategoryId)
                            .to(AssignmentCategories::Table, AssignmentCategories::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建提交表
        manager
            .create_table(
                Table::create()
                    .table(Submissions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Submissions::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Submissions::AssignmentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Submissions::StudentUid).string().not_null())
                    .col(
                        ColumnDef::new(Submissions::Score)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(ColumnDef::new(Submissions::Contents).text().not_null())
                    .col(
                        ColumnDef::new(Submissions::SubmittedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Submissions::Table, Submissions::AssignmentId)
                            .to(Assignments::Table, Assignments::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建选课表
        manager
            .create_table(
                Table::create()
                    .table(Enrollments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Enrollments::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Enrollments::ClassId).big_integer().not_null())
                    .col(ColumnDef::new(Enrollments::StudentUid).string().not_null())
                    .col(
                        ColumnDef::new(Enrollments::Grade)
                            .string()
                            .not_null()
                            .default("--"),
                    )
                    .col(
                        ColumnDef::new(Enrollments::EnrolledAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Enrollments::Table, Enrollments::ClassId)
                            .to(ClassOfferings::Table, ClassOfferings::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 唯一约束
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .unique()
                    .name("idx_courses_subject_number")
                    .table(Courses::Table)
                    .col(Courses::Subject)
                    .col(Courses::Number)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .unique()
                    .name("idx_assignment_categories_class_name")
                    .table(AssignmentCategories::Table)
                    .col(AssignmentCategories::ClassId)
                    .col(AssignmentCategories::Name)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .unique()
                    .name("idx_assignments_category_name")
                    .table(Assignments::Table)
                    .col(Assignments::CategoryId)
                    .col(Assignments::Name)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .unique()
                    .name("idx_submissions_assignment_student")
                    .table(Submissions::Table)
                    .col(Submissions::AssignmentId)
                    .col(Submissions::StudentUid)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .unique()
                    .name("idx_enrollments_class_student")
                    .table(Enrollments::Table)
                    .col(Enrollments::ClassId)
                    .col(Enrollments::StudentUid)
                    .to_owned(),
            )
            .await?;

        // 查询索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_class_offerings_term_location")
                    .table(ClassOfferings::Table)
                    .col(ClassOfferings::Season)
                    .col(ClassOfferings::Year)
                    .col(ClassOfferings::Location)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_enrollments_student_uid")
                    .table(Enrollments::Table)
                    .col(Enrollments::StudentUid)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 按照创建的相反顺序删除
        manager
            .drop_table(Table::drop().table(Enrollments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Submissions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Assignments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AssignmentCategories::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ClassOfferings::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Courses {
    #[sea_orm(iden = "courses")]
    Table,
    Id,
    Subject,
    Number,
    Name,
}

#[derive(DeriveIden)]
enum ClassOfferings {
    #[sea_orm(iden = "class_offerings")]
    Table,
    Id,
    CourseId,
    Season,
    Year,
    Location,
    StartTime,
    EndTime,
    InstructorUid,
    CreatedAt,
}

#[derive(DeriveIden)]
enum AssignmentCategories {
    #[sea_orm(iden = "assignment_categories")]
    Table,
    Id,
    ClassId,
    Name,
    Weight,
}

#[derive(DeriveIden)]
enum Assignments {
    #[sea_orm(iden = "assignments")]
    Table,
    Id,
    CategoryId,
    Name,
    MaxPoints,
    Due,
    Contents,
}

#[derive(DeriveIden)]
enum Submissions {
    #[sea_orm(iden = "submissions")]
    Table,
    Id,
    AssignmentId,
    StudentUid,
    Score,
    Contents,
    SubmittedAt,
}

#[derive(DeriveIden)]
enum Enrollments {
    #[sea_orm(iden = "enrollments")]
    Table,
    Id,
    ClassId,
    StudentUid,
    Grade,
    EnrolledAt,
}
