use bm_core::{AuthProvider, Result as CoreErrorResult, User};

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;

#[derive(Default)]
pub struct MockAuth {
    user: Mutex<Option<User>>,
    sign_ins: Mutex<Vec<(String, String)>>,
    signed_out: AtomicBool,
}

impl MockAuth {
    pub fn signed_in(user: User) -> Self {
        Self {
            user: Mutex::new(Some(user)),
            ..Default::default()
        }
    }

    pub fn sign_ins(&self) -> Vec<(String, String)> {
        self.sign_ins.lock().unwrap().clone()
    }

    pub fn is_signed_out(&self) -> bool {
        self.signed_out.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AuthProvider for MockAuth {
    async fn current_user(&self) -> Option<User> {
        self.user.lock().unwrap().clone()
    }

    async fn sign_in_with_oauth(
        &self,
        provider: &str,
        redirect_target: &str,
    ) -> CoreErrorResult<String> {
        self.sign_ins
            .lock()
            .unwrap()
            .push((provider.to_string(), redirect_target.to_string()));
        Ok(format!("https://auth.example.com/authorize?provider={provider}"))
    }

    async fn sign_out(&self) -> CoreErrorResult<()> {
        *self.user.lock().unwrap() = None;
        self.signed_out.store(true, Ordering::SeqCst);
        Ok(())
    }
}
