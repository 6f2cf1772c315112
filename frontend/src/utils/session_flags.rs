use futures::future::{FutureExt, LocalBoxFuture};
use shared::{NavbarError, SessionFlags, User};
use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;
use uuid::Uuid;

use super::subscription::Subscription;

/// Backend answering the three attribute questions about a user.
#[allow(async_fn_in_trait)]
pub trait UserAttributes {
    async fn is_admin(&self, id: Uuid) -> Result<bool, NavbarError>;
    async fn is_disabled(&self, id: Uuid) -> Result<bool, NavbarError>;
    async fn is_staff(&self, id: Uuid) -> Result<bool, NavbarError>;
}

/// Source of current-user changes. `None` means nobody is signed in.
pub trait UserStream {
    fn subscribe(&self, listener: Box<dyn Fn(Option<User>)>) -> Subscription;
}

struct FlagState {
    latest: Cell<u64>,
    flags: Cell<SessionFlags>,
}

impl FlagState {
    fn issue(&self) -> u64 {
        let token = self.latest.get().wrapping_add(1);
        self.latest.set(token);
        token
    }

    /// Store `flags` if `token` belongs to the most recent emission.
    fn apply(&self, token: u64, flags: SessionFlags) -> bool {
        if token != self.latest.get() {
            return false;
        }
        self.flags.set(flags);
        true
    }
}

/// Resolves [`SessionFlags`] for every user emission.
///
/// Each emission gets a sequence token; a lookup batch only lands if no newer
/// emission arrived while it was in flight.
pub struct SessionFlagWatcher<S> {
    service: Rc<S>,
    state: Rc<FlagState>,
}

impl<S> Clone for SessionFlagWatcher<S> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            state: self.state.clone(),
        }
    }
}

impl<S: UserAttributes + 'static> SessionFlagWatcher<S> {
    pub fn new(service: S) -> Self {
        Self {
            service: Rc::new(service),
            state: Rc::new(FlagState {
                latest: Cell::new(0),
                flags: Cell::new(SessionFlags::default()),
            }),
        }
    }

    pub fn flags(&self) -> SessionFlags {
        self.state.flags.get()
    }

    /// Start processing one emission.
    ///
    /// An absent user resets the flags before this returns. For a present
    /// user the returned future performs the lookups; it resolves to the
    /// watcher's flags once this emission has settled.
    pub fn handle(&self, user: Option<&User>) -> impl Future<Output = SessionFlags> + 'static {
        let token = self.state.issue();

        let lookup = match user {
            Some(user) => Some((self.service.clone(), user.id)),
            None => {
                self.state.apply(token, SessionFlags::default());
                None
            }
        };

        let state = self.state.clone();
        async move {
            if let Some((service, id)) = lookup {
                let flags = resolve(service.as_ref(), id).await;
                if !state.apply(token, flags) {
                    log::debug!("Discarding stale session flags for user {}", id);
                }
            }
            state.flags.get()
        }
    }

    /// Feed every emission of `stream` through [`Self::handle`].
    ///
    /// Lookups are handed to `spawn`; `on_change` receives the flags whenever
    /// an emission settles. Dropping the returned handle stops delivery.
    pub fn watch<St, Sp, F>(&self, stream: &St, spawn: Sp, on_change: F) -> Subscription
    where
        St: UserStream + ?Sized,
        Sp: Fn(LocalBoxFuture<'static, ()>) + 'static,
        F: Fn(SessionFlags) + 'static,
    {
        let watcher = self.clone();
        let on_change = Rc::new(on_change);

        stream.subscribe(Box::new(move |user| {
            let pending = watcher.handle(user.as_ref());
            if user.is_none() {
                on_change(watcher.flags());
            }

            let on_change = on_change.clone();
            spawn(
                async move {
                    on_change(pending.await);
                }
                .boxed_local(),
            );
        }))
    }
}

async fn resolve<S: UserAttributes>(service: &S, id: Uuid) -> SessionFlags {
    let lookups = futures::try_join!(
        service.is_admin(id),
        service.is_disabled(id),
        service.is_staff(id)
    );

    match lookups {
        Ok((is_admin, is_disabled, is_staff)) => SessionFlags::new(is_admin, is_disabled, is_staff),
        Err(err) => {
            log::warn!("Resetting session flags for user {}: {}", id, err);
            SessionFlags::default()
        }
    }
}
