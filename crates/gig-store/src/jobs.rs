//! Typed repository for job postings.

use futures_util::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{doc, Document};
use mongodb::results::{DeleteResult, UpdateResult};
use mongodb::Collection;
use tracing::info;

use gig_models::{Job, JobSearch};

use crate::client::{inserted_object_id, object_id, StoreClient};
use crate::error::StoreResult;

/// Repository for the jobs collection.
pub struct JobRepository {
    coll: Collection<Job>,
}

impl JobRepository {
    pub fn new(store: &StoreClient) -> Self {
        Self { coll: store.jobs() }
    }

    /// Insert a new job posting and return its generated id.
    pub async fn insert(&self, job: &Job) -> StoreResult<ObjectId> {
        let outcome = self.coll.insert_one(job).await?;
        let id = inserted_object_id(&outcome)?;
        info!(job_id = %id, title = %job.title, "created job");
        Ok(id)
    }

    /// Fetch one job; absence is `None`, not an error.
    pub async fn get(&self, id: &str) -> StoreResult<Option<Job>> {
        let id = object_id(id)?;
        Ok(self.coll.find_one(doc! {"_id": id}).await?)
    }

    /// All jobs, store-native order.
    pub async fn list_all(&self) -> StoreResult<Vec<Job>> {
        Ok(self.coll.find(doc! {}).await?.try_collect().await?)
    }

    /// Jobs posted by a specific buyer.
    pub async fn list_by_owner(&self, email: &str) -> StoreResult<Vec<Job>> {
        Ok(self
            .coll
            .find(doc! {"buyer.email": email})
            .await?
            .try_collect()
            .await?)
    }

    /// Filtered and optionally deadline-sorted search over all jobs.
    pub async fn search(&self, query: &JobSearch) -> StoreResult<Vec<Job>> {
        let mut find = self.coll.find(search_filter(query));
        if let Some(direction) = query.sort {
            find = find.sort(doc! {"deadline": direction.order()});
        }
        Ok(find.await?.try_collect().await?)
    }

    /// Replace the named fields of a job. Unknown ids are created on write
    /// (upsert) rather than failing.
    pub async fn upsert(&self, id: &str, mut fields: Document) -> StoreResult<UpdateResult> {
        let id = object_id(id)?;
        // _id is immutable; clients occasionally echo it back in the body.
        fields.remove("_id");
        Ok(self
            .coll
            .update_one(doc! {"_id": id}, doc! {"$set": fields})
            .upsert(true)
            .await?)
    }

    /// Delete by id. Deleting a missing job acknowledges zero deletions, so
    /// the operation is idempotent.
    pub async fn delete(&self, id: &str) -> StoreResult<DeleteResult> {
        let id = object_id(id)?;
        Ok(self.coll.delete_one(doc! {"_id": id}).await?)
    }

    /// Bump the bid counter after an accepted bid.
    pub async fn increment_bid_count(&self, id: &str) -> StoreResult<()> {
        let id = object_id(id)?;
        self.coll
            .update_one(doc! {"_id": id}, doc! {"$inc": {"bid_count": 1}})
            .await?;
        Ok(())
    }
}

/// Build the search filter document.
///
/// The title pattern is the user text regex-escaped, so matching is plain
/// case-insensitive substring search; an empty pattern matches every title.
fn search_filter(query: &JobSearch) -> Document {
    let text = query.search.as_deref().unwrap_or("");
    let mut filter = doc! {
        "title": {"$regex": regex::escape(text), "$options": "i"}
    };
    if let Some(category) = query.filter.as_deref().filter(|c| !c.is_empty()) {
        filter.insert("category", category);
    }
    filter
}

#[cfg(test)]
mod tests {
    use gig_models::SortDirection;

    use super::*;

    #[test]
    fn empty_search_matches_all_titles() {
        let filter = search_filter(&JobSearch::default());
        let title = filter.get_document("title").unwrap();
        assert_eq!(title.get_str("$regex").unwrap(), "");
        assert_eq!(title.get_str("$options").unwrap(), "i");
        assert!(!filter.contains_key("category"));
    }

    #[test]
    fn category_filter_is_exact() {
        let query = JobSearch {
            filter: Some("design".to_string()),
            search: Some("logo".to_string()),
            sort: Some(SortDirection::Ascending),
        };
        let filter = search_filter(&query);
        assert_eq!(filter.get_str("category").unwrap(), "design");
        assert_eq!(
            filter.get_document("title").unwrap().get_str("$regex").unwrap(),
            "logo"
        );
    }

    #[test]
    fn search_text_is_escaped_not_interpreted() {
        let query = JobSearch {
            filter: None,
            search: Some("c++ (senior)".to_string()),
            sort: None,
        };
        let filter = search_filter(&query);
        assert_eq!(
            filter.get_document("title").unwrap().get_str("$regex").unwrap(),
            r"c\+\+ \(senior\)"
        );
    }

    #[test]
    fn blank_category_is_ignored() {
        let query = JobSearch {
            filter: Some(String::new()),
            search: None,
            sort: None,
        };
        assert!(!search_filter(&query).contains_key("category"));
    }
}
