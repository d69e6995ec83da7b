use crate::database::seed::sample_questions;
use crate::dto::question_dto::{CreateQuestionPayload, UpdateQuestionPayload};
use crate::error::{Error, Result};
use crate::models::question::{NewQuestion, Question, QuestionType};
use sqlx::{PgExecutor, PgPool, Postgres, QueryBuilder, Row};
use validator::Validate;

const QUESTION_COLUMNS: &str = "id, title, type, option_a, option_b, option_c, option_d, answer, difficulty, language, created_at";
const INSERT_COLUMNS: &str = "INSERT INTO questions (title, type, option_a, option_b, option_c, option_d, answer, difficulty, language) ";
const SEARCH_COLUMNS: [&str; 5] = ["title", "option_a", "option_b", "option_c", "option_d"];

/// Postgres caps a statement at 65535 bind parameters; each row binds 9.
pub const MAX_BATCH_SIZE: usize = 65535 / 9;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuestionFilter {
    pub question_type: Option<QuestionType>,
    pub keyword: Option<String>,
}

impl QuestionFilter {
    /// `ILIKE` pattern for the keyword with wildcard characters escaped.
    fn like_pattern(&self) -> Option<String> {
        self.keyword
            .as_deref()
            .filter(|k| !k.is_empty())
            .map(|k| format!("%{}%", escape_like(k)))
    }
}

fn escape_like(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

fn push_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: &QuestionFilter) {
    let mut prefix = " WHERE ";
    if let Some(question_type) = filter.question_type {
        builder.push(prefix).push("type = ").push_bind(question_type);
        prefix = " AND ";
    }
    if let Some(pattern) = filter.like_pattern() {
        builder.push(prefix).push("(");
        for (idx, column) in SEARCH_COLUMNS.iter().enumerate() {
            if idx > 0 {
                builder.push(" OR ");
            }
            builder.push(column).push(" ILIKE ").push_bind(pattern.clone());
        }
        builder.push(")");
    }
}

fn items_query(filter: &QuestionFilter, limit: i64, offset: i64) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(format!("SELECT {} FROM questions", QUESTION_COLUMNS));
    push_filter(&mut builder, filter);
    builder
        .push(" ORDER BY created_at DESC, id DESC LIMIT ")
        .push_bind(limit)
        .push(" OFFSET ")
        .push_bind(offset);
    builder
}

fn count_query(filter: &QuestionFilter) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new("SELECT COUNT(*) FROM questions");
    push_filter(&mut builder, filter);
    builder
}

async fn insert_question<'e, E>(executor: E, question: &NewQuestion) -> Result<Question>
where
    E: PgExecutor<'e>,
{
    let sql = format!(
        "{}VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) RETURNING {}",
        INSERT_COLUMNS, QUESTION_COLUMNS
    );
    let created = sqlx::query_as::<_, Question>(&sql)
        .bind(&question.title)
        .bind(question.question_type)
        .bind(&question.option_a)
        .bind(&question.option_b)
        .bind(&question.option_c)
        .bind(&question.option_d)
        .bind(&question.answer)
        .bind(question.difficulty)
        .bind(question.language)
        .fetch_one(executor)
        .await?;
    Ok(created)
}

pub struct QuestionPage {
    pub items: Vec<Question>,
    pub total: i64,
    pub page: i64,
    pub page_size: i64,
}

#[derive(Clone)]
pub struct QuestionService {
    pool: PgPool,
    max_page_size: Option<i64>,
}

impl QuestionService {
    pub fn new(pool: PgPool, max_page_size: Option<i64>) -> Self {
        Self {
            pool,
            max_page_size,
        }
    }

    /// One page of questions, newest first, plus the total number of
    /// matches. The two are separate statements and may drift apart under
    /// concurrent writes.
    pub async fn list(&self, filter: QuestionFilter, page: i64, page_size: i64) -> Result<QuestionPage> {
        if page < 1 {
            return Err(Error::BadRequest("page must be at least 1".into()));
        }
        if page_size < 1 {
            return Err(Error::BadRequest("pageSize must be at least 1".into()));
        }
        let page_size = match self.max_page_size {
            Some(max) => page_size.min(max),
            None => page_size,
        };
        let offset = (page - 1).saturating_mul(page_size);

        let mut items_statement = items_query(&filter, page_size, offset);
        let mut count_statement = count_query(&filter);
        let (items, count_row) = tokio::try_join!(
            items_statement.build_query_as::<Question>().fetch_all(&self.pool),
            count_statement.build().fetch_one(&self.pool),
        )?;
        let total: i64 = count_row.try_get(0)?;

        tracing::debug!(
            page,
            page_size,
            total,
            returned = items.len(),
            "listed questions"
        );

        Ok(QuestionPage {
            items,
            total,
            page,
            page_size,
        })
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Question> {
        let sql = format!("SELECT {} FROM questions WHERE id = $1", QUESTION_COLUMNS);
        sqlx::query_as::<_, Question>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Question {} not found", id)))
    }

    pub async fn create(&self, payload: CreateQuestionPayload) -> Result<Question> {
        payload.validate()?;
        let new_question = NewQuestion::try_from(payload)?;
        let question = insert_question(&self.pool, &new_question).await?;
        tracing::info!(question_id = question.id, question_type = %question.question_type, "question created");
        Ok(question)
    }

    /// Inserts every item in one multi-row statement and returns the
    /// number of rows written. Items are stored as given, without the
    /// per-type checks `create` applies.
    pub async fn batch_create(&self, questions: Vec<NewQuestion>) -> Result<u64> {
        if questions.is_empty() {
            return Ok(0);
        }
        if questions.len() > MAX_BATCH_SIZE {
            return Err(Error::BadRequest(format!(
                "At most {} questions can be created in one batch",
                MAX_BATCH_SIZE
            )));
        }

        let mut builder = QueryBuilder::<Postgres>::new(INSERT_COLUMNS);
        builder.push_values(questions, |mut row, q| {
            row.push_bind(q.title)
                .push_bind(q.question_type)
                .push_bind(q.option_a)
                .push_bind(q.option_b)
                .push_bind(q.option_c)
                .push_bind(q.option_d)
                .push_bind(q.answer)
                .push_bind(q.difficulty)
                .push_bind(q.language);
        });
        let result = builder.build().execute(&self.pool).await?;

        tracing::info!(count = result.rows_affected(), "questions batch created");
        Ok(result.rows_affected())
    }

    /// Writes the supplied fields as-is. The per-type rules of `create` are
    /// not re-checked, so an update may leave a choice question without
    /// options.
    pub async fn update(&self, id: i64, payload: UpdateQuestionPayload) -> Result<Question> {
        payload.validate()?;
        if payload.is_empty() {
            return self.get_by_id(id).await;
        }

        let mut builder = QueryBuilder::<Postgres>::new("UPDATE questions SET ");
        let mut fields = builder.separated(", ");
        if let Some(title) = payload.title {
            fields.push("title = ").push_bind_unseparated(title);
        }
        if let Some(question_type) = payload.question_type {
            fields.push("type = ").push_bind_unseparated(question_type);
        }
        if let Some(option_a) = payload.option_a {
            fields.push("option_a = ").push_bind_unseparated(option_a);
        }
        if let Some(option_b) = payload.option_b {
            fields.push("option_b = ").push_bind_unseparated(option_b);
        }
        if let Some(option_c) = payload.option_c {
            fields.push("option_c = ").push_bind_unseparated(option_c);
        }
        if let Some(option_d) = payload.option_d {
            fields.push("option_d = ").push_bind_unseparated(option_d);
        }
        if let Some(answer) = payload.answer {
            fields.push("answer = ").push_bind_unseparated(answer);
        }
        if let Some(difficulty) = payload.difficulty {
            fields.push("difficulty = ").push_bind_unseparated(difficulty);
        }
        if let Some(language) = payload.language {
            fields.push("language = ").push_bind_unseparated(language);
        }
        builder
            .push(" WHERE id = ")
            .push_bind(id)
            .push(format!(" RETURNING {}", QUESTION_COLUMNS));

        let question = builder
            .build_query_as::<Question>()
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Question {} not found", id)))?;

        tracing::info!(question_id = id, "question updated");
        Ok(question)
    }

    /// Deletes every listed id that exists; unknown ids are ignored.
    pub async fn delete(&self, ids: Vec<i64>) -> Result<u64> {
        if ids.is_empty() {
            return Ok(0);
        }
        let result = sqlx::query("DELETE FROM questions WHERE id = ANY($1)")
            .bind(ids)
            .execute(&self.pool)
            .await?;

        tracing::info!(count = result.rows_affected(), "questions deleted");
        Ok(result.rows_affected())
    }

    /// Replaces the whole table with the sample questions.
    pub async fn seed(&self) -> Result<u64> {
        let mut tx = self.pool.begin().await?;
        sqlx::query("DELETE FROM questions").execute(&mut *tx).await?;

        let samples = sample_questions();
        for question in &samples {
            insert_question(&mut *tx, question).await?;
        }
        tx.commit().await?;

        tracing::info!(count = samples.len(), "question bank seeded");
        Ok(samples.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_like_wildcards() {
        assert_eq!(escape_like("50%_off\\"), "50\\%\\_off\\\\");
        assert_eq!(escape_like("goroutine"), "goroutine");
    }

    #[test]
    fn unfiltered_list_has_no_where_clause() {
        let builder = items_query(&QuestionFilter::default(), 10, 20);
        assert_eq!(
            builder.sql(),
            format!(
                "SELECT {} FROM questions ORDER BY created_at DESC, id DESC LIMIT $1 OFFSET $2",
                QUESTION_COLUMNS
            )
        );
    }

    #[test]
    fn type_and_keyword_are_anded_and_keyword_columns_ored() {
        let filter = QuestionFilter {
            question_type: Some(QuestionType::Single),
            keyword: Some("abc".into()),
        };
        let builder = count_query(&filter);
        assert_eq!(
            builder.sql(),
            "SELECT COUNT(*) FROM questions WHERE type = $1 AND (title ILIKE $2 OR option_a ILIKE $3 \
             OR option_b ILIKE $4 OR option_c ILIKE $5 OR option_d ILIKE $6)"
        );
    }

    #[test]
    fn keyword_only_filter_starts_the_where_clause() {
        let filter = QuestionFilter {
            question_type: None,
            keyword: Some("go".into()),
        };
        let builder = count_query(&filter);
        assert!(builder.sql().starts_with("SELECT COUNT(*) FROM questions WHERE (title ILIKE $1"));
    }

    #[test]
    fn empty_keyword_is_ignored() {
        let filter = QuestionFilter {
            question_type: None,
            keyword: Some(String::new()),
        };
        assert_eq!(count_query(&filter).sql(), "SELECT COUNT(*) FROM questions");
    }
}
