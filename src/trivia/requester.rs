//! HTTP client for the Open Trivia Database API.
//!
//! This module provides the [`TriviaRequester`] struct for requesting the
//! category catalog and batches of questions.

use log::{debug, info, warn};
use mockall::automock;
use reqwest::Client;

use crate::trivia::{
    ANY_CATEGORY_ID, FetchError,
    response_structs::{CategoriesResponse, CategoryResponse, QuestionsResponse},
    structs::{QuestionQuery, TriviaQuestion},
};

/// Response code returned when the filters match fewer questions than requested.
const NO_RESULTS_CODE: u8 = 1;

/// HTTP client for requesting data from the trivia server.
///
/// # Examples
///
/// ```no_run
/// let requester = TriviaRequester::new("https://opentdb.com");
/// let categories = requester.get_categories().await.unwrap();
/// println!("Categories: {:?}", categories);
/// ```
pub struct TriviaRequester {
    /// Trivia server url, without trailing slash
    url: String,
    /// HTTP client
    client: Client,
}

/// Trait for making requests to the trivia server.
///
/// This trait abstracts the HTTP operations for easier testing with mocks.
#[automock]
pub trait Requester {
    /// Fetches the category catalog, in API order.
    async fn get_categories(&self) -> Result<Vec<CategoryResponse>, FetchError>;
    /// Fetches up to `query.amount` decoded questions.
    async fn get_questions(&self, query: &QuestionQuery) -> Result<Vec<TriviaQuestion>, FetchError>;
}

impl TriviaRequester {
    /// Create a new [TriviaRequester].
    ///
    /// # Arguments
    ///
    /// * `url` - The base URL of the trivia server.
    pub fn new(url: &str) -> Self {
        let client = reqwest::Client::new();
        TriviaRequester {
            url: url.to_string(),
            client,
        }
    }
}

impl Requester for TriviaRequester {
    /// Request `/api_category.php` to get the category catalog.
    ///
    /// This api call returns a json object:
    /// ```text
    /// { trivia_categories: [ { id: 9, name: "General Knowledge" }, { id: 10, name: "Entertainment: Books" } ] }
    /// ```
    async fn get_categories(&self) -> Result<Vec<CategoryResponse>, FetchError> {
        let url = format!("{}/api_category.php", &self.url);
        info!("request trivia categories");
        debug!("request {}", &url);

        let categories_response: CategoriesResponse =
            self.client.get(&url).send().await?.json().await?;

        debug!("response from {} -> {:?}", &url, &categories_response);

        Ok(categories_response.trivia_categories)
    }

    /// Request `/api.php?amount={amount}&category={id}&difficulty={difficulty}`.
    ///
    /// `category` is omitted for [`ANY_CATEGORY_ID`] and `difficulty` when no
    /// difficulty is set. The api call returns a json object:
    /// ```text
    /// { response_code: 0, results: [ { question: "...", correct_answer: "...", incorrect_answers: ["..."] } ] }
    /// ```
    /// Questions are HTML-decoded into [`TriviaQuestion`]. A "no results"
    /// response code yields an empty list, any other non-zero code is an error.
    async fn get_questions(&self, query: &QuestionQuery) -> Result<Vec<TriviaQuestion>, FetchError> {
        let url = format!("{}/api.php", &self.url);
        let params = query_params(query);
        info!("request {} trivia questions", query.amount);
        debug!("request {}?{:?}", &url, &params);

        let questions_response: QuestionsResponse = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await?
            .json()
            .await?;

        debug!("response from {} -> {:?}", &url, &questions_response);

        match questions_response.response_code {
            0 => {}
            NO_RESULTS_CODE => {
                warn!("not enough questions for {}", query);
                return Ok(vec![]);
            }
            code => return Err(FetchError::Api(code)),
        }

        Ok(questions_response
            .results
            .into_iter()
            .map(TriviaQuestion::from)
            .collect())
    }
}

/// Builds the query parameters of a question request.
fn query_params(query: &QuestionQuery) -> Vec<(&'static str, String)> {
    let mut params = vec![("amount", query.amount.to_string())];

    if query.category_id != ANY_CATEGORY_ID {
        params.push(("category", query.category_id.clone()));
    }
    if let Some(difficulty) = query.difficulty {
        params.push(("difficulty", difficulty.as_query().to_string()));
    }

    params
}
