use anyhow::{bail, Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

use rifa_core::{
    create_authenticator, Authenticator, Config, Credentials, Identity, Pool, PoolStats,
    QrRenderer, QrServerRenderer, Ticket,
};

/// One interactive raffle session.
///
/// Owns the live pool snapshot, the admin identity (if logged in) and
/// the generator driving lock selection. The pool lives exactly as long
/// as the session; there is no persistence.
pub struct Session {
    pool: Pool,
    pix_key: String,
    authenticator: Box<dyn Authenticator>,
    qr: Box<dyn QrRenderer>,
    admin: Option<Identity>,
    rng: StdRng,
}

impl Session {
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Build a session over a caller-provided generator (seeded in tests).
    pub fn with_rng(config: &Config, mut rng: StdRng) -> Result<Self> {
        let authenticator = create_authenticator(&config.auth)?;
        let pool = Pool::new(
            config.raffle.names.clone(),
            config.raffle.lock_count,
            &mut rng,
        )?;

        Ok(Self {
            pool,
            pix_key: config.payment.pix_key.clone(),
            authenticator,
            qr: Box::new(QrServerRenderer::new()),
            admin: None,
            rng,
        })
    }

    pub fn pool(&self) -> &Pool {
        &self.pool
    }

    pub fn pix_key(&self) -> &str {
        &self.pix_key
    }

    /// URL of a QR image for the current PIX key.
    pub fn payment_qr_url(&self) -> String {
        self.qr.image_url(&self.pix_key)
    }

    pub fn is_admin(&self) -> bool {
        self.admin.is_some()
    }

    pub fn admin(&self) -> Option<&Identity> {
        self.admin.as_ref()
    }

    pub fn login(&mut self, email: &str, password: &str) -> Result<&Identity> {
        let identity = self
            .authenticator
            .authenticate(&Credentials::new(email, password))?;
        Ok(self.admin.insert(identity))
    }

    pub fn logout(&mut self) {
        self.admin = None;
    }

    fn require_admin(&self) -> Result<()> {
        if self.admin.is_none() {
            bail!("admin login required");
        }
        Ok(())
    }

    pub fn reserve(&mut self, id: u32, name: &str, phone: &str) -> Result<&Ticket> {
        self.pool = self.pool.reserve(id, name, phone)?;
        self.pool
            .get(id)
            .context("ticket disappeared after reservation")
    }

    pub fn approve(&mut self, id: u32) -> Result<()> {
        self.require_admin()?;
        self.pool = self.pool.approve(id, &mut self.rng)?;
        Ok(())
    }

    pub fn reject(&mut self, id: u32) -> Result<()> {
        self.require_admin()?;
        self.pool = self.pool.reject(id)?;
        Ok(())
    }

    pub fn reset(&mut self, id: u32) -> Result<()> {
        self.require_admin()?;
        self.pool = self.pool.reset(id)?;
        Ok(())
    }

    pub fn stats(&self) -> Result<PoolStats> {
        self.require_admin()?;
        Ok(self.pool.stats())
    }

    pub fn update_pix_key(&mut self, key: &str) -> Result<()> {
        self.require_admin()?;
        self.pix_key = key.to_string();
        Ok(())
    }

    /// JSON snapshot of the full pool (admin only, real statuses).
    pub fn dump(&self) -> Result<String> {
        self.require_admin()?;
        Ok(serde_json::to_string_pretty(&self.pool)?)
    }
}
