//! In-memory fakes for exercising controllers without a browser.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;
use futures::channel::oneshot;

use super::client::ApiClient;
use super::session::SessionListener;
use super::state::StateStore;
use super::transport::{ApiRequest, ApiResponse, Transport};

/// Replies with canned responses in order and records every request.
#[derive(Default)]
pub struct ScriptedTransport {
    responses: RefCell<VecDeque<Result<ApiResponse, String>>>,
    requests: RefCell<Vec<ApiRequest>>,
}

impl ScriptedTransport {
    pub fn new(responses: Vec<ApiResponse>) -> Rc<Self> {
        Rc::new(Self {
            responses: RefCell::new(responses.into_iter().map(Ok).collect()),
            requests: RefCell::default(),
        })
    }

    pub fn failing(message: &str) -> Rc<Self> {
        Rc::new(Self {
            responses: RefCell::new(VecDeque::from([Err(message.to_string())])),
            requests: RefCell::default(),
        })
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, String> {
        self.requests.borrow_mut().push(request);
        let next = self.responses.borrow_mut().pop_front();
        next.unwrap_or_else(|| Err("no scripted response".to_string()))
    }
}

/// Each request waits until the test releases its gate, so responses can
/// be made to arrive in any order.
#[derive(Default)]
pub struct GatedTransport {
    gates: RefCell<VecDeque<oneshot::Receiver<ApiResponse>>>,
}

impl GatedTransport {
    /// Returns the transport and one sender per expected request, in request order.
    pub fn new(requests: usize) -> (Rc<Self>, Vec<oneshot::Sender<ApiResponse>>) {
        let (senders, receivers): (Vec<_>, VecDeque<_>) =
            (0..requests).map(|_| oneshot::channel()).unzip();
        let transport = Rc::new(Self {
            gates: RefCell::new(receivers),
        });
        (transport, senders)
    }
}

#[async_trait(?Send)]
impl Transport for GatedTransport {
    async fn send(&self, _request: ApiRequest) -> Result<ApiResponse, String> {
        let gate = self.gates.borrow_mut().pop_front();
        match gate {
            Some(gate) => gate.await.map_err(|_| "gate dropped".to_string()),
            None => Err("unexpected request".to_string()),
        }
    }
}

#[derive(Default)]
pub struct CountingSession {
    expired: Cell<usize>,
}

impl CountingSession {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn expired_count(&self) -> usize {
        self.expired.get()
    }
}

impl SessionListener for CountingSession {
    fn session_expired(&self) {
        self.expired.set(self.expired.get() + 1);
    }
}

/// State store that can be disposed like an unmounted view's signal.
pub struct MemoryStore<S>(Rc<RefCell<Option<S>>>);

impl<S> Clone for MemoryStore<S> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<S: Default> MemoryStore<S> {
    pub fn new() -> Self {
        Self(Rc::new(RefCell::new(Some(S::default()))))
    }

    pub fn dispose(&self) {
        self.0.borrow_mut().take();
    }
}

impl<S: Clone> MemoryStore<S> {
    pub fn snapshot(&self) -> S {
        self.0.borrow().clone().expect("store disposed")
    }
}

impl<S: Clone> StateStore<S> for MemoryStore<S> {
    fn read(&self) -> Option<S> {
        self.0.borrow().clone()
    }

    fn write(&self, f: impl FnOnce(&mut S)) -> bool {
        match self.0.borrow_mut().as_mut() {
            Some(state) => {
                f(state);
                true
            }
            None => false,
        }
    }
}

pub fn client(transport: Rc<dyn Transport>, session: Rc<CountingSession>) -> ApiClient {
    ApiClient::new(transport, session)
}
