pub mod whois;
