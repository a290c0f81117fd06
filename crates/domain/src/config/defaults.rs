/// Built-in word lists used when a mode requires one and the operator
/// supplied none. Injected into [`SettingsValidator`](super::SettingsValidator)
/// at construction so tests can substitute fixtures.
#[derive(Debug, Clone, Copy)]
pub struct DefaultWordlists {
    pub brute_force: &'static [&'static str],
    pub alterations: &'static [&'static str],
}

pub(crate) const BUILTIN: DefaultWordlists = DefaultWordlists {
    brute_force: BRUTE_FORCE,
    alterations: ALTERATIONS,
};

static BRUTE_FORCE: &[&str] = &[
    "www", "mail", "smtp", "pop", "pop3", "imap", "webmail", "mx", "mx1", "mx2",
    "ns", "ns1", "ns2", "ns3", "dns", "dns1", "dns2", "search", "api", "api-dev",
    "ftp", "sftp", "ssh", "vpn", "remote", "gateway", "gw", "proxy", "firewall",
    "admin", "administrator", "portal", "intranet", "extranet", "internal",
    "dev", "devel", "development", "test", "testing", "qa", "uat", "stage",
    "staging", "prod", "production", "demo", "beta", "alpha", "preview",
    "app", "apps", "mobile", "m", "web", "web1", "web2", "www1", "www2",
    "host", "server", "server1", "server2", "backup", "bak", "old", "new",
    "db", "database", "sql", "mysql", "postgres", "oracle", "mssql", "redis",
    "cdn", "static", "assets", "img", "images", "media", "files", "download",
    "downloads", "upload", "docs", "documentation", "wiki", "help", "support",
    "blog", "news", "forum", "forums", "shop", "store", "payment", "pay",
    "secure", "security", "auth", "login", "sso", "id", "identity", "account",
    "accounts", "cloud", "git", "gitlab", "svn", "jenkins", "ci", "build",
    "monitor", "monitoring", "metrics", "status", "stats", "log", "logs",
    "mail1", "mail2", "email", "exchange", "owa", "autodiscover", "lyncdiscover",
    "voip", "sip", "chat", "irc", "video", "stream", "tv", "office", "crm",
    "erp", "hr", "billing", "invoice", "partner", "partners", "client",
    "clients", "customer", "customers", "services", "service", "ws", "rest",
    "soap", "graphql", "grafana", "kibana", "elastic", "kafka", "rabbitmq",
    "ldap", "ad", "dc", "dc1", "dc2", "radius", "ntp", "time", "print",
    "printer", "scan", "cam", "camera", "iot", "lab", "labs", "research",
    "sandbox", "training", "edu", "learn", "careers", "jobs", "events",
];

static ALTERATIONS: &[&str] = &[
    "dev", "test", "qa", "uat", "stage", "staging", "prod", "new", "old",
    "beta", "alpha", "demo", "tmp", "temp", "backup", "bak", "int", "internal",
    "ext", "external", "admin", "api", "app", "web", "secure", "vpn", "mail",
    "preprod", "pre", "post", "v1", "v2", "v3", "01", "02", "03", "1", "2", "3",
];
