// src/api/interview.rs
//! Mock interview sessions: create, walk through questions, fetch the report

use tracing::info;

use crate::config::ClientConfig;
use crate::core::{Endpoint, Result, ServiceClient};
use crate::types::{
    CreateInterviewRequest, CurrentQuestionResponse, InterviewReport, InterviewSession,
    SubmitAnswerRequest, SubmitAnswerResponse,
};

const SESSION_ENDPOINT: &str = "/api/interview/session";
const ANSWER_ENDPOINT: &str = "/api/interview/answer";

#[derive(Debug, Clone)]
pub struct InterviewApi {
    service: ServiceClient,
}

impl InterviewApi {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let service = ServiceClient::new(&config.parsed_base_url()?, config.interview_timeout)?;
        Ok(Self { service })
    }

    pub async fn create_session(
        &self,
        request: &CreateInterviewRequest,
    ) -> Result<InterviewSession> {
        info!(
            "Creating interview session with {} questions",
            request.question_count
        );
        self.service
            .post_json(&Endpoint::new(SESSION_ENDPOINT), request)
            .await
    }

    pub async fn get_session(&self, session_id: &str) -> Result<InterviewSession> {
        self.service
            .get(&Endpoint::new(SESSION_ENDPOINT).push(session_id))
            .await
    }

    pub async fn get_current_question(&self, session_id: &str) -> Result<CurrentQuestionResponse> {
        self.service
            .get(&Endpoint::new(SESSION_ENDPOINT).push(session_id).push("question"))
            .await
    }

    pub async fn submit_answer(
        &self,
        request: &SubmitAnswerRequest,
    ) -> Result<SubmitAnswerResponse> {
        info!(
            "Submitting answer for session {}, question {}",
            request.session_id, request.question_index
        );
        self.service
            .post_json(&Endpoint::new(ANSWER_ENDPOINT), request)
            .await
    }

    /// Triggers evaluation on first call, so it can take a while
    pub async fn get_report(&self, session_id: &str) -> Result<InterviewReport> {
        info!("Requesting interview report for {}", session_id);
        self.service
            .get(&Endpoint::new(SESSION_ENDPOINT).push(session_id).push("report"))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::envelope::BUSINESS_FAILURE_MESSAGE;
    use crate::types::SessionStatus;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn api_for(server: &MockServer) -> InterviewApi {
        InterviewApi::new(&ClientConfig::new(&server.uri())).unwrap()
    }

    fn question_json(index: i32) -> serde_json::Value {
        json!({
            "questionIndex": index,
            "question": "How does the borrow checker prevent data races?",
            "type": "RUST_BASIC",
            "category": "Rust"
        })
    }

    fn ok(data: serde_json::Value) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(json!({
            "code": 200,
            "message": "success",
            "data": data
        }))
    }

    #[tokio::test]
    async fn test_create_session_posts_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/interview/session"))
            .and(body_json(json!({
                "resumeText": "Systems programmer",
                "questionCount": 2,
                "resumeId": 7
            })))
            .respond_with(ok(json!({
                "sessionId": "abc123",
                "resumeText": "Systems programmer",
                "totalQuestions": 2,
                "currentQuestionIndex": 0,
                "questions": [question_json(0), question_json(1)],
                "status": "CREATED"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let request = CreateInterviewRequest::new("Systems programmer", 2).with_resume_id(7);
        let session = api_for(&server).create_session(&request).await.unwrap();
        assert_eq!(session.session_id, "abc123");
        assert_eq!(session.questions.len(), 2);
        assert_eq!(session.status, SessionStatus::Created);
    }

    #[tokio::test]
    async fn test_get_session() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/interview/session/abc123"))
            .respond_with(ok(json!({
                "sessionId": "abc123",
                "resumeText": "Systems programmer",
                "totalQuestions": 1,
                "currentQuestionIndex": 1,
                "questions": [question_json(0)],
                "status": "COMPLETED"
            })))
            .mount(&server)
            .await;

        let session = api_for(&server).get_session("abc123").await.unwrap();
        assert!(session.status.is_finished());
    }

    #[tokio::test]
    async fn test_current_question_open_and_completed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/interview/session/open/question"))
            .respond_with(ok(json!({"completed": false, "question": question_json(3)})))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/interview/session/done/question"))
            .respond_with(ok(json!({"completed": true, "message": "All questions answered"})))
            .mount(&server)
            .await;

        let api = api_for(&server);
        let open = api.get_current_question("open").await.unwrap();
        assert!(!open.completed);
        assert_eq!(open.question.unwrap().question_index, 3);

        let done = api.get_current_question("done").await.unwrap();
        assert!(done.completed);
        assert!(done.question.is_none());
    }

    #[tokio::test]
    async fn test_submit_answer() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/interview/answer"))
            .and(body_json(json!({
                "sessionId": "abc123",
                "questionIndex": 0,
                "answer": "Ownership plus Send/Sync"
            })))
            .respond_with(ok(json!({
                "hasNextQuestion": true,
                "nextQuestion": question_json(1),
                "currentIndex": 1,
                "totalQuestions": 2
            })))
            .mount(&server)
            .await;

        let request = SubmitAnswerRequest {
            session_id: "abc123".to_string(),
            question_index: 0,
            answer: "Ownership plus Send/Sync".to_string(),
        };
        let response = api_for(&server).submit_answer(&request).await.unwrap();
        assert!(response.has_next_question);
        assert_eq!(response.current_index, 1);
    }

    #[tokio::test]
    async fn test_submit_answer_invalid_session() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/interview/answer"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"code": 400, "message": "invalid session"})),
            )
            .mount(&server)
            .await;

        let request = SubmitAnswerRequest {
            session_id: "gone".to_string(),
            question_index: 0,
            answer: "anything".to_string(),
        };
        let err = api_for(&server).submit_answer(&request).await.unwrap_err();
        assert_eq!(err.to_string(), "invalid session");
        assert_eq!(err.business_code(), Some(400));
    }

    #[tokio::test]
    async fn test_report_business_error_without_message() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/interview/session/abc123/report"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 500})))
            .mount(&server)
            .await;

        let err = api_for(&server).get_report("abc123").await.unwrap_err();
        assert_eq!(err.to_string(), BUSINESS_FAILURE_MESSAGE);
    }

    #[tokio::test]
    async fn test_report() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/interview/session/abc123/report"))
            .respond_with(ok(json!({
                "sessionId": "abc123",
                "totalQuestions": 1,
                "overallScore": 68,
                "categoryScores": [{"category": "Rust", "score": 68, "questionCount": 1}],
                "questionDetails": [{
                    "questionIndex": 0,
                    "question": "How does the borrow checker prevent data races?",
                    "category": "Rust",
                    "userAnswer": null,
                    "score": 68,
                    "feedback": "Mention aliasing XOR mutation"
                }],
                "overallFeedback": "Decent",
                "strengths": ["Ownership"],
                "improvements": ["Lifetimes"],
                "referenceAnswers": [{
                    "questionIndex": 0,
                    "question": "How does the borrow checker prevent data races?",
                    "referenceAnswer": "Shared XOR mutable references",
                    "keyPoints": ["&T", "&mut T"]
                }]
            })))
            .mount(&server)
            .await;

        let report = api_for(&server).get_report("abc123").await.unwrap();
        assert_eq!(report.overall_score, 68);
        assert_eq!(report.category_scores[0].question_count, 1);
        assert_eq!(report.question_details[0].user_answer, None);
        assert_eq!(report.reference_answers[0].key_points.len(), 2);
    }
}
