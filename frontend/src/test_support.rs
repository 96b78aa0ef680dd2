use crate::api::{BuildRequest, RawReply, RequestSender, UploadFile};
use crate::error::SubmitError;
use futures::FutureExt;
use futures::future::LocalBoxFuture;
use std::cell::RefCell;
use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq)]
pub struct FakeFile {
    name: String,
}

impl FakeFile {
    pub fn new(name: &str) -> Self {
        Self { name: name.to_string() }
    }
}

impl UploadFile for FakeFile {
    fn file_name(&self) -> String {
        self.name.clone()
    }
}

pub fn reply(status: u16, body: &str) -> RawReply {
    RawReply {
        status,
        body: body.to_string(),
    }
}

/// Sender double that hands out queued replies and records every request.
#[derive(Default)]
pub struct CannedSender {
    replies: RefCell<VecDeque<Result<RawReply, SubmitError>>>,
    sent: RefCell<Vec<BuildRequest<FakeFile>>>,
}

impl CannedSender {
    pub fn replying(reply: RawReply) -> Self {
        let sender = Self::default();
        sender.push(Ok(reply));
        sender
    }

    pub fn failing(err: SubmitError) -> Self {
        let sender = Self::default();
        sender.push(Err(err));
        sender
    }

    pub fn push(&self, outcome: Result<RawReply, SubmitError>) {
        self.replies.borrow_mut().push_back(outcome);
    }

    pub fn sent(&self) -> Vec<BuildRequest<FakeFile>> {
        self.sent.borrow().clone()
    }
}

impl RequestSender for CannedSender {
    type File = FakeFile;

    fn send(
        &self,
        request: BuildRequest<FakeFile>,
    ) -> LocalBoxFuture<'static, Result<RawReply, SubmitError>> {
        self.sent.borrow_mut().push(request);
        let outcome = self
            .replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(SubmitError::NoResponse("no canned reply".into())));
        futures::future::ready(outcome).boxed_local()
    }
}
