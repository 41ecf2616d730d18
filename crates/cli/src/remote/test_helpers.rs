// SPDX-License-Identifier: MIT

//! Scripted [`Api`] double for controller and command tests.
//!
//! Each operation pops its next canned response from a queue and
//! records the call, so tests can assert both what the controller did
//! and what it never requested.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use tokio::sync::Notify;

use brief_core::{Draft, SummaryRecord};

use super::api::{Api, ApiFuture, ApiResult};

/// Convenience record constructor for tests.
pub fn record(id: u64, headline: &str, body: &str) -> SummaryRecord {
    SummaryRecord {
        id,
        headline: headline.to_string(),
        body: body.to_string(),
    }
}

/// Handshake gate letting a test hold `regenerate` in flight while
/// other operations interleave with it.
#[derive(Default)]
pub struct RegenerateGate {
    /// Notified once the regenerate request is "on the wire".
    pub entered: Notify,
    /// The test notifies this to let the response come back.
    pub release: Notify,
}

impl RegenerateGate {
    pub fn new() -> Rc<Self> {
        Rc::new(RegenerateGate::default())
    }
}

/// One recorded API invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List,
    Get(u64),
    Create(Draft),
    Update(u64, Draft),
    Delete(u64),
    Regenerate,
}

/// Scripted API double.
#[derive(Default)]
pub struct ScriptedApi {
    list: RefCell<VecDeque<ApiResult<Vec<SummaryRecord>>>>,
    get: RefCell<VecDeque<ApiResult<SummaryRecord>>>,
    create: RefCell<VecDeque<ApiResult<SummaryRecord>>>,
    update: RefCell<VecDeque<ApiResult<SummaryRecord>>>,
    delete: RefCell<VecDeque<ApiResult<()>>>,
    regenerate: RefCell<VecDeque<ApiResult<()>>>,
    calls: RefCell<Vec<Call>>,
    gate: Option<Rc<RegenerateGate>>,
}

impl ScriptedApi {
    pub fn new() -> Self {
        ScriptedApi::default()
    }

    /// Attach a gate that holds regenerate responses until released.
    pub fn with_regenerate_gate(mut self, gate: Rc<RegenerateGate>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn queue_list(&self, response: ApiResult<Vec<SummaryRecord>>) {
        self.list.borrow_mut().push_back(response);
    }

    pub fn queue_get(&self, response: ApiResult<SummaryRecord>) {
        self.get.borrow_mut().push_back(response);
    }

    pub fn queue_create(&self, response: ApiResult<SummaryRecord>) {
        self.create.borrow_mut().push_back(response);
    }

    pub fn queue_update(&self, response: ApiResult<SummaryRecord>) {
        self.update.borrow_mut().push_back(response);
    }

    pub fn queue_delete(&self, response: ApiResult<()>) {
        self.delete.borrow_mut().push_back(response);
    }

    pub fn queue_regenerate(&self, response: ApiResult<()>) {
        self.regenerate.borrow_mut().push_back(response);
    }

    /// Everything invoked so far, in order.
    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }
}

impl Api for ScriptedApi {
    fn list(&self) -> ApiFuture<'_, Vec<SummaryRecord>> {
        self.calls.borrow_mut().push(Call::List);
        let response = self
            .list
            .borrow_mut()
            .pop_front()
            .expect("no scripted list response");
        Box::pin(async move { response })
    }

    fn get(&self, id: u64) -> ApiFuture<'_, SummaryRecord> {
        self.calls.borrow_mut().push(Call::Get(id));
        let response = self
            .get
            .borrow_mut()
            .pop_front()
            .expect("no scripted get response");
        Box::pin(async move { response })
    }

    fn create(&self, draft: Draft) -> ApiFuture<'_, SummaryRecord> {
        self.calls.borrow_mut().push(Call::Create(draft));
        let response = self
            .create
            .borrow_mut()
            .pop_front()
            .expect("no scripted create response");
        Box::pin(async move { response })
    }

    fn update(&self, id: u64, draft: Draft) -> ApiFuture<'_, SummaryRecord> {
        self.calls.borrow_mut().push(Call::Update(id, draft));
        let response = self
            .update
            .borrow_mut()
            .pop_front()
            .expect("no scripted update response");
        Box::pin(async move { response })
    }

    fn delete(&self, id: u64) -> ApiFuture<'_, ()> {
        self.calls.borrow_mut().push(Call::Delete(id));
        let response = self
            .delete
            .borrow_mut()
            .pop_front()
            .expect("no scripted delete response");
        Box::pin(async move { response })
    }

    fn regenerate(&self) -> ApiFuture<'_, ()> {
        self.calls.borrow_mut().push(Call::Regenerate);
        let response = self
            .regenerate
            .borrow_mut()
            .pop_front()
            .expect("no scripted regenerate response");
        let gate = self.gate.clone();
        Box::pin(async move {
            if let Some(gate) = gate {
                gate.entered.notify_one();
                gate.release.notified().await;
            }
            response
        })
    }
}
